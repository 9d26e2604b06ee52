//! Bloom - a local-first mental-wellness companion
//!
//! Bloom tracks small daily "wins" (moods, journal entries, gratitude,
//! self-care activities), runs multi-day challenge programs, scores
//! self-assessment screenings, and talks to a generative-AI wellness coach,
//! all against a local SQLite database. No account required; user data
//! never leaves the machine except for what coach prompts include.
//!
//! ## Layers
//!
//! 1. **Catalogs** (`catalog`): static content tables - challenge programs,
//!    badges, screenings, self-care activities, the emotion wheel.
//! 2. **Progress** (`progress`): persistence plus the gamification layer
//!    (XP, levels, streaks, badges, challenge-day progression).
//! 3. **Coach** (`coach`): client for a Gemini-style `generateContent`
//!    endpoint with the app's prompt catalog and hardcoded fallbacks.

pub mod catalog;
pub mod coach;
pub mod config;
pub mod domain;
pub mod progress;
pub mod scoring;
pub mod verify;

pub use domain::*;
