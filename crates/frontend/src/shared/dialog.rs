/// Which dialog of a management screen is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Dialog {
    #[default]
    Closed,
    Create,
    Edit { id: String },
    ConfirmDelete { id: String, label: String },
    ChangeStatus { id: String, current: String },
}

/// Open dialog plus the in-flight flag of its submit button.
///
/// While a request is in flight the dialog cannot be closed or resubmitted;
/// a failed request leaves it open with the user's input intact.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogState {
    dialog: Dialog,
    submitting: bool,
}

impl DialogState {
    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn is_open(&self) -> bool {
        self.dialog != Dialog::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn open(&mut self, dialog: Dialog) {
        if !self.submitting {
            self.dialog = dialog;
        }
    }

    /// Returns whether the dialog closed.
    pub fn close(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.dialog = Dialog::Closed;
        true
    }

    /// Returns `false` when a submission is already running or nothing is open.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting || !self.is_open() {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Success closes the dialog; failure keeps it open for another try.
    pub fn finish(&mut self, ok: bool) {
        self.submitting = false;
        if ok {
            self.dialog = Dialog::Closed;
        }
    }
}
