// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Orthos Core
//!
//! A small 3D geometry kernel: immutable vector and quaternion algebra, oriented
//! bounding boxes, and an exact box-box overlap test built on the Separating Axis
//! Theorem.
//!
//! Every type in this crate is a value type. Operations never mutate their
//! receiver; they return new instances, which makes all of them safe to call
//! from any number of threads on independently owned values.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod geometry;
pub mod math;

pub use config::Tolerances;
pub use error::{GeometryError, Result};
pub use geometry::{Obb, Orthotope};
pub use math::{ArithmeticVector, Quaternion, RealVector, Ternion};
