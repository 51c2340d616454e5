pub mod circle;
pub mod rectangle;
pub mod square;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use square::Square;
