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

//! Provides oriented boxes and the tests that operate on them.
//!
//! The shapes in this module are built from an origin corner and a set of
//! mutually orthogonal edge vectors. [`Orthotope`] captures that shape for any
//! number of edges; [`Obb`] is the three-dimensional box used for collision
//! queries.

pub mod obb;
pub mod orthotope;
pub mod sat;

pub use self::obb::Obb;
pub use self::orthotope::Orthotope;
