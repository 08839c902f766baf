use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::components::family_tree::FamilyTreeCanvas;
use crate::components::modal::{Modal, ModalController, PopupKind};

// Sample rows standing in for the server-rendered colony tables.
const MICE: &[&str] = &["1", "2", "3", "4"];
const REQUESTS: &[&str] = &["1", "2"];

fn data_id(ev: &MouseEvent, attr: &str) -> Option<String> {
	ev.target()
		.and_then(|t| t.dyn_into::<Element>().ok())
		.and_then(|el| el.get_attribute(attr))
}

/// Colony page: mouse and request tables with popup triggers, the
/// shared modal, and the family tree container.
#[component]
pub fn Home() -> impl IntoView {
	let comments = ModalController::new(PopupKind::Comment);
	let requests = ModalController::new(PopupKind::Request);
	let tree_subject = RwSignal::new(None::<String>);

	let on_comment_click = move |ev: MouseEvent| {
		if let Some(id) = data_id(&ev, "data-mouse-id") {
			comments.show_popup_for(&id);
		}
	};
	let on_request_click = move |ev: MouseEvent| {
		if let Some(id) = data_id(&ev, "data-request-id") {
			requests.show_popup_for(&id);
		}
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="colony-page">
				<h1>"Mouse Colony"</h1>

				<table class="mouse-table">
					<thead>
						<tr>
							<th>"Mouse"</th>
							<th>"Comments"</th>
							<th>"Family tree"</th>
						</tr>
					</thead>
					<tbody>
						{MICE
							.iter()
							.map(|id| {
								let id = *id;
								view! {
									<tr>
										<td>{id}</td>
										<td
											class="popup-trigger"
											data-mouse-id=id
											on:click=on_comment_click
										>
											"View comments"
										</td>
										<td on:click=move |_| tree_subject.set(Some(id.to_string()))>
											"Show tree"
										</td>
									</tr>
								}
							})
							.collect_view()}
					</tbody>
				</table>

				<table class="request-table">
					<thead>
						<tr>
							<th>"Request"</th>
							<th>"Messages"</th>
						</tr>
					</thead>
					<tbody>
						{REQUESTS
							.iter()
							.map(|id| {
								let id = *id;
								view! {
									<tr>
										<td>{id}</td>
										<td
											class="popup-trigger"
											data-request-id=id
											on:click=on_request_click
										>
											"View messages"
										</td>
									</tr>
								}
							})
							.collect_view()}
					</tbody>
				</table>

				<Modal comments=comments requests=requests />
				<FamilyTreeCanvas subject=tree_subject />
			</div>
		</ErrorBoundary>
	}
}
