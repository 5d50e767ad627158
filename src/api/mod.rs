//! API handlers for LabLoan REST endpoints

pub mod borrowers;
pub mod equipment;
pub mod export;
pub mod health;
pub mod loans;
pub mod locations;
pub mod openapi;
pub mod rooms;
pub mod staff;
pub mod stats;
