pub(crate) mod canvas;
pub(crate) mod draw;
pub(crate) mod mask;
