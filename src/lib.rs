//! Severance calculator for Indonesian employment termination (PHK)
//!
//! This crate estimates the statutory compensation owed under PP 35/2021:
//! severance pay (UP), service appreciation pay (UPMK) and rights
//! replacement pay (UPH), from a tenure and a monthly base salary.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod normalization;
pub mod presentation;
