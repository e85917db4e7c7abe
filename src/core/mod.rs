// Core modules implementing error modeling shared by the loader surface.
pub mod error;
