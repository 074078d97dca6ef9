// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::landing::Landing;
use super::metadata::SiteMetadata;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Stylesheet};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Stylesheet href="/pkg/landing-page.css" />
		<SiteMetadata />

		<Router>
			<Routes fallback=|| "Not found.".into_view()>
				<Route path=StaticSegment("") view=Landing />
			</Routes>
		</Router>
	}
}
