//! Domain Layer
//!
//! This is the core of Gymdesk - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Teacher, Student, Routine, Gym)
//! - `value_objects/` - Immutable value types (UserRole, PaymentStatus, Credentials)
//! - `services/` - Domain services (SessionResolver)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Ports & Adapters** - Session persistence goes through a trait-defined port

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
