use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::layout::TreeLayout;
use super::render;
use super::state::FamilyTreeState;
use crate::api;

/// Canvas view of one subject's family tree.
///
/// Opening (`subject` set to an id) shows the container and kicks off a
/// fresh fetch; closing (`subject` set to `None`) wipes the canvas and
/// hides it again. Concurrent opens are last-write-wins: there is no
/// dedup or cancellation, a later response simply overwrites.
#[component]
pub fn FamilyTreeCanvas(
	#[prop(into)] subject: RwSignal<Option<String>>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<FamilyTreeState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init) = (state.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if state_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();

		// The container starts hidden, so the parent can measure 0.
		let (w, h) = (
			width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.filter(|w| *w > 0.0)
					.unwrap_or(800.0)
			}),
			height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.filter(|h| *h > 0.0)
					.unwrap_or(600.0)
			}),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		*state_init.borrow_mut() = Some(FamilyTreeState::new(w, h));

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref s) = *state_anim.borrow() {
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// Open triggers a fetch, close wipes. Best-effort: a failed fetch
	// logs once and leaves the canvas cleared.
	let state_fetch = state.clone();
	Effect::new(move |_| match subject.get() {
		Some(id) => {
			if let Some(ref mut s) = *state_fetch.borrow_mut() {
				s.begin_loading();
			}
			let state = state_fetch.clone();
			spawn_local(async move {
				match api::fetch_family_tree(&id).await {
					Ok(tree) => {
						log::debug!("fetched family tree for {id}: {} nodes", tree.count());
						if let Some(ref mut s) = *state.borrow_mut() {
							s.apply_layout(TreeLayout::compute(&tree));
						}
					}
					Err(err) => {
						log::error!("family tree fetch for {id} failed: {err}");
						if let Some(ref mut s) = *state.borrow_mut() {
							s.fail();
						}
					}
				}
			});
		}
		None => {
			if let Some(ref mut s) = *state_fetch.borrow_mut() {
				s.close();
			}
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.begin_pan(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pan_to(x, y);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.end_pan();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.end_pan();
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			s.apply_zoom(factor, x, y);
		}
	};

	view! {
		<div
			id="family-tree-container"
			class="family-tree-container"
			style:display=move || if subject.get().is_some() { "block" } else { "none" }
		>
			<canvas
				id="family-tree"
				node_ref=canvas_ref
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>
			<button class="family-tree-close" on:click=move |_| subject.set(None)>
				"Close"
			</button>
		</div>
	}
}
