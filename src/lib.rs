//! A small dependency-injection walkthrough: a coffee maker, a heater
//! and a pump wired together through narrow configuration capabilities.
//!
//! Consumers never construct their own collaborators. They receive a
//! bundle that can hand them shared handles (`HasHeater`, `HasPump`,
//! `HasConsole`), and the [`shop::CoffeeShop`] composition root is the
//! one place where concrete instances are created. Swapping the pump
//! for its logging decorator happens there too, without touching the
//! maker.

pub mod console;
pub mod heater;
pub mod maker;
pub mod pump;
pub mod shop;
pub mod stopwatch;

pub use console::{Console, HasConsole, SharedConsole, Terminal, Transcript};
pub use heater::{ElectricHeater, HasHeater, Heater, SharedHeater};
pub use maker::CoffeeMaker;
pub use pump::{HasPump, LoggingPump, Pump, SharedPump, Thermosiphon};
pub use shop::CoffeeShop;
pub use stopwatch::{measure, measure_and_report};
