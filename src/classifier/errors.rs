// Copyright (C) 2025 The dz_phonenumber Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::str::Utf8Error;

use thiserror::Error;

/// Contract violations of the classifier entry points.
///
/// A number that is malformed or unknown is never an error: it classifies as
/// [`NumberCategory::Invalid`](crate::NumberCategory::Invalid).
#[derive(Debug, PartialEq, Error)]
pub enum ClassifyError {
    #[error("Input is not a valid UTF-8 string: {0}")]
    InvalidArgument(#[from] Utf8Error),
}
