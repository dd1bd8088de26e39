//! Persisted theme flag plus synchronous change notification.
//!
//! `toggle()` persists the new value, flips the document's `dark`
//! class and calls every registered dependent before returning, so the
//! very next rendered frame already uses the new palette.

use crate::constants::STORAGE_THEME_KEY;
use site_core::Theme;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

type Dependent = Box<dyn Fn(Theme)>;

pub struct ThemeController {
    current: RefCell<Theme>,
    dependents: RefCell<Vec<Dependent>>,
}

impl ThemeController {
    /// Seed from persistent storage (default light) and mirror the
    /// flag onto the document root.
    pub fn load(document: &web::Document) -> Rc<ThemeController> {
        let stored = local_storage()
            .and_then(|s| s.get_item(STORAGE_THEME_KEY).ok().flatten())
            .map(|v| Theme::parse(&v))
            .unwrap_or_default();
        let controller = Rc::new(ThemeController {
            current: RefCell::new(stored),
            dependents: RefCell::new(Vec::new()),
        });
        apply_document_class(document, stored);
        controller
    }

    #[inline]
    pub fn get(&self) -> Theme {
        *self.current.borrow()
    }

    /// Flip, persist, restyle the document and notify dependents, all
    /// before returning.
    pub fn toggle(&self, document: &web::Document) -> Theme {
        let next = self.get().flipped();
        *self.current.borrow_mut() = next;
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_THEME_KEY, next.as_str());
        }
        apply_document_class(document, next);
        for dependent in self.dependents.borrow().iter() {
            dependent(next);
        }
        next
    }

    pub fn on_change(&self, dependent: impl Fn(Theme) + 'static) {
        self.dependents.borrow_mut().push(Box::new(dependent));
    }
}

fn local_storage() -> Option<web::Storage> {
    web::window()?.local_storage().ok().flatten()
}

fn apply_document_class(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    }
}
