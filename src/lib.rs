// src/lib.rs
// RecipeHub - Local-first recipe finder, favorites and meal planner
//
// Architecture:
// - Domain-centric: matching, favorites and plan rules are pure domain code
// - Explicit: the session is read per operation and passed down, never global
// - Local-first: every user collection lives in a local SQLite key-value store
// - Application Layer: DTOs and command adapters for the CLI

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod config;
pub mod integrations;
pub mod observability;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    find_matching,
    // Catalog
    Catalog,
    CatalogOrigin,
    Country,
    Difficulty,
    // Collections
    Favorites,
    FilterCatalog,
    Ingredient,
    MealPlan,
    PlanType,
    Recipe,
    RecipeDraft,
    SelectionState,
    // Session
    Session,
    Theme,
    DAILY_PLAN_CAPACITY,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Application
// ============================================================================

pub use application::AppState;
pub use crate::config::Settings;
