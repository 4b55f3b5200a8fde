// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Waypoint Model
//!
//! **The Core Domain Model for the Waypoint exact TSP solvers.**
//!
//! This crate defines the fundamental data structures used to represent an
//! instance of the **Traveling Salesman Problem (TSP)** over an explicit,
//! possibly asymmetric, integer distance matrix. It serves as the data
//! interchange layer between the problem definition (instance files) and the
//! search engines in `waypoint_exact`.
//!
//! ## Architecture
//!
//! * **`index`**: Provides the strongly-typed `CityIndex` wrapper to prevent
//!   logical indexing errors.
//! * **`matrix`**: Contains the immutable `DistanceMatrix` and full-tour cost
//!   evaluation.
//! * **`tour`**: Defines the output format, a visiting order together with its
//!   closed-cycle cost.
//! * **`loading`**: Turns whitespace-delimited text into a validated
//!   `DistanceMatrix`, all-or-nothing.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: City indices are a distinct type, not bare `usize`.
//! 2.  **Memory Layout**: The matrix is stored as a flattened row-major vector
//!     to maximize cache locality during search.
//! 3.  **Fail-Fast**: The loader validates inputs eagerly so the engines never
//!     see an invalid instance.

pub mod index;
pub mod loading;
pub mod matrix;
pub mod tour;
