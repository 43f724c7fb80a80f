pub mod lifecycle;
pub mod renderer;
pub mod translate_loop;
pub mod translator;
