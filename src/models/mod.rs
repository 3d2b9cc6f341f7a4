mod goal;

pub use goal::Goal;
