mod configuration;
mod render;
mod script;
mod visualization;
