use alloc::string::String;

/// The four elements a [`PopupStepToggle`] manipulates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PopupPart {
    HeadPanel,
    ChildPanel,
    /// Indicator dot for the head step.
    FirstDot,
    /// Indicator dot for the child step.
    SecondDot,
}

/// Class-list access provided by the host.
pub trait ClassTarget {
    fn add_class(&mut self, part: PopupPart, class: &str);

    fn remove_class(&mut self, part: PopupPart, class: &str);
}

impl<T: ClassTarget + ?Sized> ClassTarget for &mut T {
    fn add_class(&mut self, part: PopupPart, class: &str) {
        (**self).add_class(part, class);
    }

    fn remove_class(&mut self, part: PopupPart, class: &str) {
        (**self).remove_class(part, class);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopupClasses {
    /// Marks the panel that is shown.
    pub visible: String,
    /// Marks the indicator dot of the current step.
    pub active: String,
}

impl Default for PopupClasses {
    fn default() -> Self {
        Self {
            visible: String::from("visible"),
            active: String::from("active"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PopupStep {
    #[default]
    Head,
    Child,
}

/// A two-step popup list: a head panel and a child panel, each with an indicator dot.
///
/// `next`/`prev` always rewrite the classes, even when the step does not change; class lists
/// make the repeated writes idempotent.
#[derive(Clone, Debug, Default)]
pub struct PopupStepToggle {
    classes: PopupClasses,
    step: PopupStep,
}

impl PopupStepToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes(classes: PopupClasses) -> Self {
        Self {
            classes,
            step: PopupStep::Head,
        }
    }

    pub fn classes(&self) -> &PopupClasses {
        &self.classes
    }

    pub fn step(&self) -> PopupStep {
        self.step
    }

    /// Writes the classes for the current step, e.g. right after the popup is created.
    pub fn sync(&self, target: &mut impl ClassTarget) {
        match self.step {
            PopupStep::Head => self.show_head(target),
            PopupStep::Child => self.show_child(target),
        }
    }

    /// Shows the child panel and activates the second dot.
    pub fn next(&mut self, target: &mut impl ClassTarget) {
        self.step = PopupStep::Child;
        self.show_child(target);
    }

    /// Shows the head panel and activates the first dot.
    pub fn prev(&mut self, target: &mut impl ClassTarget) {
        self.step = PopupStep::Head;
        self.show_head(target);
    }

    fn show_head(&self, target: &mut impl ClassTarget) {
        let PopupClasses { visible, active } = &self.classes;
        target.remove_class(PopupPart::ChildPanel, visible);
        target.add_class(PopupPart::HeadPanel, visible);
        target.remove_class(PopupPart::SecondDot, active);
        target.add_class(PopupPart::FirstDot, active);
    }

    fn show_child(&self, target: &mut impl ClassTarget) {
        let PopupClasses { visible, active } = &self.classes;
        target.remove_class(PopupPart::HeadPanel, visible);
        target.add_class(PopupPart::ChildPanel, visible);
        target.remove_class(PopupPart::FirstDot, active);
        target.add_class(PopupPart::SecondDot, active);
    }
}
