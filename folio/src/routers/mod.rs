pub(crate) mod background;
pub(crate) mod idle;
pub(crate) mod navigator;
pub(crate) mod pointer;
pub(crate) mod theme;
pub(crate) mod tick;
pub(crate) mod window;
