// SPDX-License-Identifier: MPL-2.0
mod spinner;

pub use spinner::Spinner;
