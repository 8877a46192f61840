pub mod board;
pub use board::*;

pub mod chips;
pub use chips::*;

pub mod narrator;
pub use narrator::*;

pub mod position;
pub use position::*;

pub mod records;
pub use records::*;

pub mod settings;
pub use settings::*;

pub mod street;
pub use street::*;

pub mod verb;
pub use verb::*;

pub mod winners;
pub use winners::*;
