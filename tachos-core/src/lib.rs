//! Board-agnostic control logic for the Tachos motor speed controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (pins, ports, PWM timer, delay)
//! - 4x4 matrix keypad scanning
//! - Two-digit speed entry
//! - Speed tier classification and PWM duty control
//! - Top-level control loop with stop-button reset

#![no_std]
#![deny(unsafe_code)]

pub mod controller;
pub mod input;
pub mod keypad;
pub mod pwm;
pub mod speed;
pub mod traits;
