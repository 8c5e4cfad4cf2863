//! Goals module - financial goal and risk profile models.

mod goals_model;

pub use goals_model::{Goal, RiskProfile};
