//! [`PropertiesPage`] definitions.

use std::collections::HashSet;

use service::{
    domain::{
        property::{self, ListingStatus},
        user, Property,
    },
    read,
};

use crate::notice::{Notice, Notices};

use super::{property_edit::PropertyEditor, wizard::Wizard};

/// Predefined neighborhoods offered by the creation form.
pub const NEIGHBORHOODS: [&str; 10] = [
    "Downtown",
    "Westside",
    "Eastside",
    "Midtown",
    "Uptown",
    "Riverside",
    "Hillcrest",
    "Oakwood",
    "Maplewood",
    "Sunset District",
];

/// Property management page.
///
/// Owns the canonical in-memory [`Property`] collection: child dialogs only
/// ever receive clones and commit back through this page.
#[derive(Debug, Default)]
pub struct PropertiesPage {
    /// Canonical [`Property`] collection.
    properties: Vec<Property>,

    /// Search term of the filter bar.
    pub search_term: String,

    /// Selected neighborhood filter, or [`None`] for all.
    pub neighborhood: Option<String>,

    /// Selected listing status filter, or [`None`] for all.
    pub status: Option<ListingStatus>,

    /// IDs of the currently selected rows.
    ///
    /// Independent of the filtered view: a selection may keep referencing
    /// rows no longer visible after refiltering.
    selected: HashSet<property::Id>,

    /// Currently open [`Dialog`], if any.
    dialog: Option<Dialog>,

    /// Pending [`Notice`]s of this page.
    notices: Notices,
}

/// Dialog opened over the [`PropertiesPage`].
#[derive(Debug)]
pub enum Dialog {
    /// Creation [`Wizard`].
    Create(Wizard),

    /// Read-only detail view of the [`Property`] with the ID.
    ///
    /// [`Property`]: service::domain::Property
    View(property::Id),

    /// In-place [`PropertyEditor`].
    Edit(PropertyEditor),
}

/// Element of a table row a click landed on.
///
/// The checkbox, the status badge and the actions menu trigger intercept
/// clicks before they reach the row itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RowTarget {
    /// The row itself.
    Row,

    /// The selection checkbox.
    Checkbox,

    /// The listing status badge.
    StatusBadge,

    /// The actions menu trigger.
    ActionsMenu,
}

impl PropertiesPage {
    /// Creates a new [`PropertiesPage`] over the provided collection.
    #[must_use]
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            properties,
            ..Self::default()
        }
    }

    /// Returns the whole canonical collection.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Returns the [`Property`] with the provided ID, if any.
    #[must_use]
    pub fn property(&self, id: property::Id) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Returns the collection filtered by the current search term,
    /// neighborhood and status.
    ///
    /// The predicate is recomputed on every call; applying it repeatedly
    /// yields the same result, and an empty search term with no selected
    /// filters yields the whole collection.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Property> {
        let filter = read::property::list::Filter {
            search: self.search_term.clone(),
            neighborhood: self.neighborhood.clone(),
            status: self.status,
        };
        self.properties.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Returns the currently open [`Dialog`], if any.
    #[must_use]
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Returns the IDs of the currently selected rows.
    #[must_use]
    pub fn selected(&self) -> &HashSet<property::Id> {
        &self.selected
    }

    /// Selects or deselects the row with the provided ID.
    pub fn set_selected(&mut self, id: property::Id, selected: bool) {
        if selected {
            drop(self.selected.insert(id));
        } else {
            drop(self.selected.remove(&id));
        }
    }

    /// Selects every currently visible row, or clears the selection.
    pub fn select_all(&mut self, selected: bool) {
        if selected {
            let visible: Vec<_> =
                self.filtered().iter().map(|p| p.id).collect();
            self.selected = visible.into_iter().collect();
        } else {
            self.selected.clear();
        }
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Routes a click on a table row.
    ///
    /// Only a click on the row itself opens the detail view; the checkbox,
    /// the status badge and the actions menu trigger swallow it.
    pub fn click_row(&mut self, id: property::Id, target: RowTarget) {
        match target {
            RowTarget::Row => {
                if self.property(id).is_some() {
                    self.dialog = Some(Dialog::View(id));
                }
            }
            RowTarget::Checkbox
            | RowTarget::StatusBadge
            | RowTarget::ActionsMenu => {}
        }
    }

    /// Immediately flips the listing status of the [`Property`] with the
    /// provided ID.
    ///
    /// The flip is optimistic: no external confirmation is awaited and no
    /// rollback path exists.
    pub fn toggle_status(&mut self, id: property::Id) {
        let Some(property) =
            self.properties.iter_mut().find(|p| p.id == id)
        else {
            return;
        };

        let status = property.listing_status.toggled();
        property.listing_status = status;
        self.notices.push(Notice::success(
            "Status Updated",
            format!("Property {status} successfully!"),
        ));
    }

    /// Assigns the provided listing status to every selected [`Property`],
    /// leaves all others untouched and clears the selection.
    pub fn bulk_set_status(&mut self, status: ListingStatus) {
        for property in &mut self.properties {
            if self.selected.contains(&property.id) {
                property.listing_status = status;
            }
        }

        self.notices.push(Notice::success(
            "Bulk Update Complete",
            format!("{} properties {status} successfully!", self.selected.len()),
        ));
        self.selected.clear();
    }

    /// Removes the [`Property`] with the provided ID.
    ///
    /// Permanent; any confirmation belongs to the presentation layer.
    pub fn delete(&mut self, id: property::Id) {
        self.properties.retain(|p| p.id != id);
    }

    /// Opens the creation [`Wizard`].
    pub fn open_wizard(&mut self) {
        self.dialog = Some(Dialog::Create(Wizard::new()));
    }

    /// Returns the open creation [`Wizard`], if any.
    pub fn wizard_mut(&mut self) -> Option<&mut Wizard> {
        match &mut self.dialog {
            Some(Dialog::Create(wizard)) => Some(wizard),
            Some(Dialog::View(_) | Dialog::Edit(_)) | None => None,
        }
    }

    /// Steps the open [`Wizard`] back, closing it (and discarding all of
    /// its state) when it aborts from the first step.
    pub fn wizard_back(&mut self) {
        use super::wizard::Retreat;

        if let Some(wizard) = self.wizard_mut() {
            if wizard.back() == Retreat::Aborted {
                self.dialog = None;
            }
        }
    }

    /// Submits the open [`Wizard`] from its review step.
    ///
    /// On success the new [`Property`] joins the collection and the wizard
    /// closes with its state reset; on failure an aggregated validation
    /// notice is posted and the wizard stays open on review, untouched.
    /// The creation is atomic: no partial commit ever happens.
    pub fn submit_wizard(&mut self, created_by: Option<user::Id>) {
        use super::wizard::Step;

        let Some(Dialog::Create(wizard)) = &self.dialog else {
            return;
        };
        if wizard.step() != Step::Review {
            return;
        }

        match wizard.submit(&self.properties, created_by) {
            Ok(property) => {
                self.properties.push(property);
                self.dialog = None;
                self.notices.push(Notice::success(
                    "Success",
                    "Property created successfully!",
                ));
            }
            Err(e) => {
                self.notices
                    .push(Notice::error("Validation Error", e.to_string()));
            }
        }
    }

    /// Opens the [`PropertyEditor`] over a deep clone of the [`Property`]
    /// with the provided ID.
    pub fn open_edit(&mut self, id: property::Id) {
        if let Some(property) = self.property(id) {
            self.dialog = Some(Dialog::Edit(PropertyEditor::open(property)));
        }
    }

    /// Transitions the open detail view into the editor over the same
    /// [`Property`], closing the view.
    pub fn edit_from_view(&mut self) {
        if let Some(Dialog::View(id)) = self.dialog {
            self.open_edit(id);
        }
    }

    /// Returns the open [`PropertyEditor`], if any.
    pub fn editor_mut(&mut self) -> Option<&mut PropertyEditor> {
        match &mut self.dialog {
            Some(Dialog::Edit(editor)) => Some(editor),
            Some(Dialog::View(_) | Dialog::Create(_)) | None => None,
        }
    }

    /// Saves the open [`PropertyEditor`], reconciling the collection by ID.
    ///
    /// On success the editor closes; on failure an error notice is posted
    /// and the editor stays open with its state intact. A concurrent rename
    /// of the same entry is overwritten: last write wins.
    pub fn save_edit(&mut self) {
        let Some(Dialog::Edit(editor)) = &self.dialog else {
            return;
        };

        match editor.save() {
            Ok(saved) => {
                if let Some(slot) =
                    self.properties.iter_mut().find(|p| p.id == saved.id)
                {
                    *slot = saved;
                }
                self.dialog = None;
                self.notices.push(Notice::success(
                    "Success",
                    "Property updated successfully!",
                ));
            }
            Err(e) => {
                self.notices
                    .push(Notice::error("Validation Error", e.to_string()));
            }
        }
    }

    /// Closes any open [`Dialog`].
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Removes and returns all pending [`Notice`]s of this page.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    /// Returns the most recent pending [`Notice`], if any.
    #[must_use]
    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }
}
