/// Which popup variant a controller serves. Both share one overlay and
/// one close control; only the endpoint and injection target differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupKind {
	Comment,
	Request,
}

impl PopupKind {
	/// Endpoint serving this popup's HTML fragment.
	pub fn endpoint(&self, id: &str) -> String {
		match self {
			PopupKind::Comment => format!("/show_comment/{id}/"),
			PopupKind::Request => format!("/show_message/{id}/"),
		}
	}

	/// Element id of the content-injection target inside the modal.
	pub fn target_id(&self) -> &'static str {
		match self {
			PopupKind::Comment => "mouse-information-pop-up",
			PopupKind::Request => "request-messaging-pop-up",
		}
	}
}

/// Visibility flag plus the injected fragment for one popup. The close
/// control lives outside the injection target, so wiping the content
/// never touches it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
	pub visible: bool,
	pub content: String,
}

impl ModalState {
	/// Install a fetched fragment and show the modal. A later fragment
	/// simply overwrites an earlier one (last-write-wins).
	pub fn apply_fragment(&mut self, html: String) {
		self.content = html;
		self.visible = true;
	}

	/// Hide the modal and wipe the injected content.
	pub fn dismiss(&mut self) {
		self.visible = false;
		self.content.clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn endpoints_follow_the_popup_kind() {
		assert_eq!(PopupKind::Comment.endpoint("17"), "/show_comment/17/");
		assert_eq!(PopupKind::Request.endpoint("4"), "/show_message/4/");
	}

	#[test]
	fn targets_are_distinct_per_kind() {
		assert_ne!(PopupKind::Comment.target_id(), PopupKind::Request.target_id());
	}

	#[test]
	fn fragment_shows_and_dismiss_wipes() {
		let mut modal = ModalState::default();
		assert!(!modal.visible);

		modal.apply_fragment("<p>comment</p>".into());
		assert!(modal.visible);
		assert_eq!(modal.content, "<p>comment</p>");

		modal.dismiss();
		assert!(!modal.visible);
		assert!(modal.content.is_empty());
	}

	#[test]
	fn dismiss_when_hidden_is_a_no_op() {
		let mut modal = ModalState::default();
		modal.dismiss();
		assert_eq!(modal, ModalState::default());
	}

	#[test]
	fn later_fragment_overwrites_earlier() {
		let mut modal = ModalState::default();
		modal.apply_fragment("<p>first</p>".into());
		modal.apply_fragment("<p>second</p>".into());
		assert_eq!(modal.content, "<p>second</p>");
	}
}
