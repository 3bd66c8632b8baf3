// SmartWeb services
// Stateless helpers and engines: URL normalization, id generation, settings, theme.

pub mod id_generator;
pub mod settings_engine;
pub mod theme_engine;
pub mod url_normalizer;
