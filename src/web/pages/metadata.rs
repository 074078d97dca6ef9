// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

/// Page metadata read by the meta context when the document head is written.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageMetadata {
	pub title: &'static str,
	pub description: &'static str,
}

pub const SITE_METADATA: PageMetadata = PageMetadata {
	title: "Landing Page",
	description: "Your awesome landing page",
};

#[component]
pub fn SiteMetadata() -> impl IntoView {
	view! {
		<Title text=SITE_METADATA.title />
		<Meta name="description" content=SITE_METADATA.description />
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn site_metadata_is_populated() {
		assert_eq!(SITE_METADATA.title, "Landing Page");
		assert_eq!(SITE_METADATA.description, "Your awesome landing page");
	}

	#[test]
	fn site_metadata_fields_are_nonempty() {
		assert!(!SITE_METADATA.title.is_empty());
		assert!(!SITE_METADATA.description.is_empty());
	}
}
