// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;

/// The outermost document structure shared by every page.
///
/// Children land in the body unchanged. The head interior is supplied by the
/// caller; the layout itself only fixes the charset and the document language.
#[component]
pub fn RootLayout(#[prop(optional, into)] head: Option<AnyView>, children: Children) -> impl IntoView {
	view! {
		<!DOCTYPE html>
		<html lang="en">
			<head>
				<meta charset="utf-8" />
				{head}
			</head>
			<body>{children()}</body>
		</html>
	}
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
	use super::*;

	fn render_with_paragraph() -> String {
		view! {
			<RootLayout>
				<p>"Hello"</p>
			</RootLayout>
		}
		.to_html()
	}

	#[test]
	fn wraps_children_in_language_tagged_shell() {
		let html = render_with_paragraph();
		assert_eq!(html.matches("<html").count(), 1);
		assert!(html.contains("<html lang=\"en\""));
		assert_eq!(html.matches("<body").count(), 1);
		assert!(html.contains("<p>Hello</p>"));
	}

	#[test]
	fn children_land_inside_the_body() {
		let html = render_with_paragraph();
		let body_start = html.find("<body>").unwrap();
		let body_end = html.find("</body>").unwrap();
		assert!(body_start < body_end);
		assert!(html[body_start..body_end].contains("<p>Hello</p>"));
	}

	#[test]
	fn renders_identically_for_identical_children() {
		assert_eq!(render_with_paragraph(), render_with_paragraph());
	}

	#[test]
	fn empty_children_produce_an_empty_body() {
		let html = view! {
			<RootLayout>""</RootLayout>
		}
		.to_html();
		assert_eq!(html.matches("<body").count(), 1);
		let body_start = html.find("<body>").unwrap();
		let body_end = html.find("</body>").unwrap();
		assert!(!html[body_start..body_end].contains("<p"));
	}

	#[test]
	fn head_content_stays_out_of_the_body() {
		let head = view! { <meta name="generator" content="test" /> }.into_any();
		let html = view! {
			<RootLayout head>
				<p>"Hello"</p>
			</RootLayout>
		}
		.to_html();
		let body_start = html.find("<body>").unwrap();
		let generator = html.find("generator").unwrap();
		assert!(generator < body_start);
	}
}
