pub mod numeric;

pub use numeric::HeadlineFigure;
