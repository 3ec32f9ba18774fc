// Domain layer: portfolio models and ports. No rendering or IO here.

pub mod model;
pub mod ports;
