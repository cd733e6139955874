//! Core data models for the vacation accrual engine.

mod employee;

pub use employee::{Employee, EmployeeClass};
