use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use super::state::{ModalState, PopupKind};
use crate::api;

/// Owns one popup variant's fetch-and-show flow and its modal state.
///
/// Cheap to copy; handlers capture it by value. Both page variants get
/// their own controller, so comment and request popups coexist without
/// colliding.
#[derive(Clone, Copy)]
pub struct ModalController {
	kind: PopupKind,
	state: RwSignal<ModalState>,
}

impl ModalController {
	pub fn new(kind: PopupKind) -> Self {
		Self {
			kind,
			state: RwSignal::new(ModalState::default()),
		}
	}

	/// Fetch the fragment for `id` and show it. Best-effort: failures
	/// are logged and the modal stays hidden.
	pub fn show_popup_for(&self, id: &str) {
		let (kind, state) = (self.kind, self.state);
		let url = kind.endpoint(id);
		spawn_local(async move {
			match api::fetch_fragment(&url).await {
				Ok(html) => state.update(|s| s.apply_fragment(html)),
				Err(err) => log::error!("{kind:?} popup fetch failed: {err}"),
			}
		});
	}

	pub fn dismiss(&self) {
		self.state.update(|s| s.dismiss());
	}

	pub fn is_visible(&self) -> bool {
		self.state.get().visible
	}

	fn content(&self) -> String {
		self.state.get().content
	}
}

/// The shared overlay hosting both popup variants, with the permanent
/// close control. Clicking the overlay itself (outside the content
/// box) dismisses and wipes both variants.
#[component]
pub fn Modal(comments: ModalController, requests: ModalController) -> impl IntoView {
	let visible = move || comments.is_visible() || requests.is_visible();
	let dismiss_all = move || {
		comments.dismiss();
		requests.dismiss();
	};

	let on_overlay_click = move |ev: MouseEvent| {
		let on_overlay = ev
			.target()
			.and_then(|t| t.dyn_into::<Element>().ok())
			.is_some_and(|el| el.id() == "myModal");
		if on_overlay {
			dismiss_all();
		}
	};

	view! {
		<div
			id="myModal"
			class="modal"
			style:display=move || if visible() { "block" } else { "none" }
			on:click=on_overlay_click
		>
			<div class="modal-content">
				<span id="modal-span" class="close" on:click=move |_| dismiss_all()>
					"\u{d7}"
				</span>
				<div
					id=PopupKind::Comment.target_id()
					inner_html=move || comments.content()
				></div>
				<div
					id=PopupKind::Request.target_id()
					inner_html=move || requests.content()
				></div>
			</div>
		</div>
	}
}
