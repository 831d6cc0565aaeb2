//! tiu-client library: client for the TIU student portal
//!
//! This library logs into the TIU web student portal (`https://my.tiu.edu.iq`),
//! keeps the session cookie across requests, and extracts structured records
//! (profile, personal info, course grades) from the portal's server-rendered
//! HTML pages.
//!
//! # Example
//!
//! ```no_run
//! use tiu_client::TiuClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut client = TiuClient::new()?;
//! client.login("student_id", "password").await?;
//!
//! println!("Logged in as {:?}", client.profile().name);
//!
//! let courses = client.fetch_courses().await?;
//! for course in &courses.courses {
//!     println!("{} {} ({} credits): {}",
//!              course.code, course.name, course.credits, course.grade);
//! }
//!
//! client.logout().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.
//!
//! HTML extraction (the `parse` module) is pure, synchronous computation and can
//! be used on saved pages without any network access.

#![warn(missing_docs)]

mod client;
pub mod config;
mod error;
mod models;
pub mod parse;
mod utils;

// Re-export public API
pub use client::TiuClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use models::{Course, CourseData, PersonalInfo, UserProfile};
