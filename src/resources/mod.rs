mod capture;

pub use capture::PointerCapture;
