//! # Document model
//!
//! Widgets are hosted inside a document owned by the surrounding
//! composition layer. This module models just the surface a widget core
//! needs from it:
//!
//! - element creation and lookup (`ElementId` keys into a slot map),
//! - prefixed class names, attributes, inline styles and text content,
//! - the focused ("active") element,
//! - a registry of document-level listeners, so interaction code can attach
//!   move/up handlers for the duration of a gesture and detach them after,
//! - resize observers bound to elements.
//!
//! Listener and observer records carry no callbacks. The host routes events
//! to whichever widget owns a live record; the registry exists so ownership
//! is explicit and leaks are countable.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use bitflags::bitflags;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::Rect;
use crate::error::DocumentError;

new_key_type! {
    pub struct ElementId;
    pub struct ListenerId;
    pub struct ObserverId;
}

pub type DocumentRef = Rc<RefCell<Document>>;

bitflags! {
    /// Document-level event kinds a listener can be registered for.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DocumentEvents: u8 {
        const POINTER_MOVE = 1 << 0;
        const POINTER_UP = 1 << 1;
        const TOUCH_MOVE = 1 << 2;
        const TOUCH_END = 1 << 3;
    }
}

#[derive(Clone, Debug, Default)]
pub struct Element {
    pub tag: String,
    classes: SmallVec<[String; 4]>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    rect: Rect,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        self.styles.get(name).map(String::as_str)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

#[derive(Clone, Copy, Debug)]
struct Listener {
    events: DocumentEvents,
    owner: u64,
}

pub struct Document {
    prefix: String,
    elements: SlotMap<ElementId, Element>,
    listeners: SlotMap<ListenerId, Listener>,
    resize_observers: SlotMap<ObserverId, ElementId>,
    active: Option<ElementId>,
    next_owner: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new("ripple-")
    }
}

impl Document {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            elements: SlotMap::with_key(),
            listeners: SlotMap::with_key(),
            resize_observers: SlotMap::with_key(),
            active: None,
            next_owner: 1,
        }
    }

    pub fn shared(prefix: impl Into<String>) -> DocumentRef {
        Rc::new(RefCell::new(Self::new(prefix)))
    }

    /// Applies the document's class prefix, e.g. `slider` -> `ripple-slider`.
    pub fn prefixed(&self, class: &str) -> String {
        format!("{}{}", self.prefix, class)
    }

    /// Allocates an identity used to tag listeners registered by one widget.
    pub fn next_owner(&mut self) -> u64 {
        let id = self.next_owner;
        self.next_owner += 1;
        id
    }

    pub fn create_element(&mut self, tag: impl Into<String>) -> ElementId {
        self.elements.insert(Element {
            tag: tag.into(),
            ..Element::default()
        })
    }

    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        if self.active == Some(id) {
            self.active = None;
        }
        self.resize_observers.retain(|_, el| *el != id);
        self.elements.remove(id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    fn element_mut(&mut self, id: ElementId) -> Result<&mut Element, DocumentError> {
        self.elements
            .get_mut(id)
            .ok_or(DocumentError::UnknownElement(id))
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) -> Result<(), DocumentError> {
        let el = self.element_mut(id)?;
        if !el.has_class(class) {
            el.classes.push(class.to_string());
        }
        Ok(())
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) -> Result<(), DocumentError> {
        let el = self.element_mut(id)?;
        el.classes.retain(|c| c != class);
        Ok(())
    }

    pub fn toggle_class(
        &mut self,
        id: ElementId,
        class: &str,
        on: bool,
    ) -> Result<(), DocumentError> {
        if on {
            self.add_class(id, class)
        } else {
            self.remove_class(id, class)
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.elements.get(id).is_some_and(|el| el.has_class(class))
    }

    pub fn set_attribute(
        &mut self,
        id: ElementId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), DocumentError> {
        self.element_mut(id)?
            .attributes
            .insert(name.to_string(), value.into());
        Ok(())
    }

    pub fn set_style(
        &mut self,
        id: ElementId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), DocumentError> {
        self.element_mut(id)?
            .styles
            .insert(name.to_string(), value.into());
        Ok(())
    }

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) -> Result<(), DocumentError> {
        self.element_mut(id)?.text = text.into();
        Ok(())
    }

    /// Sets the element's laid-out rect, in document coordinates.
    pub fn set_rect(&mut self, id: ElementId, rect: Rect) -> Result<(), DocumentError> {
        self.element_mut(id)?.rect = rect;
        Ok(())
    }

    pub fn rect(&self, id: ElementId) -> Option<Rect> {
        self.elements.get(id).map(|el| el.rect)
    }

    pub fn focus(&mut self, id: ElementId) -> Result<Option<ElementId>, DocumentError> {
        if !self.elements.contains_key(id) {
            return Err(DocumentError::UnknownElement(id));
        }
        Ok(self.active.replace(id))
    }

    pub fn blur(&mut self) -> Option<ElementId> {
        self.active.take()
    }

    pub fn active_element(&self) -> Option<ElementId> {
        self.active
    }

    pub fn add_listener(&mut self, events: DocumentEvents, owner: u64) -> ListenerId {
        self.listeners.insert(Listener { events, owner })
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }

    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(id)
    }

    /// Counts live listeners registered for any of `events`.
    pub fn listener_count(&self, events: DocumentEvents) -> usize {
        self.listeners
            .values()
            .filter(|l| l.events.intersects(events))
            .count()
    }

    pub fn listeners_owned_by(&self, owner: u64) -> usize {
        self.listeners.values().filter(|l| l.owner == owner).count()
    }

    pub fn observe_resize(&mut self, target: ElementId) -> Result<ObserverId, DocumentError> {
        if !self.elements.contains_key(target) {
            return Err(DocumentError::UnknownElement(target));
        }
        Ok(self.resize_observers.insert(target))
    }

    pub fn unobserve_resize(&mut self, id: ObserverId) -> bool {
        self.resize_observers.remove(id).is_some()
    }

    pub fn resize_observer_count(&self) -> usize {
        self.resize_observers.len()
    }
}
