//! Contact form validation and the simulated send.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::timer::Scheduler;
use crate::widgets::notify::Notice;
use crate::widgets::Controller;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub const REJECTED_MESSAGE: &str = "Please fix the errors in the form.";
pub const SENT_MESSAGE: &str = "Thank you! Your message has been sent (demo).";
pub const SENDING_LABEL: &str = "Sending...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: bool,
    pub email: bool,
    pub subject: bool,
    pub message: bool,
}

impl FieldErrors {
    pub fn has(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Subject => self.subject,
            Field::Message => self.message,
        }
    }

    pub fn count(&self) -> usize {
        Field::ALL.iter().filter(|f| self.has(**f)).count()
    }

    pub fn any(&self) -> bool {
        self.count() > 0
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Every field is checked, so all errors surface at once.
pub fn validate(fields: &ContactFields, subject_placeholder: &str) -> FieldErrors {
    let email = fields.email.trim();
    FieldErrors {
        name: fields.name.trim().is_empty(),
        email: email.is_empty() || !is_valid_email(email),
        subject: fields.subject == subject_placeholder,
        message: fields.message.trim().is_empty(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sending,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContactMsg {
    Edit(Field, String),
    Submit,
    /// The simulated round trip finished.
    Sent,
}

pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    phase: Phase,
    submit_delay_ms: u32,
    subject_placeholder: String,
    notice: Option<Notice>,
    notices_raised: u64,
}

impl ContactForm {
    pub fn new(submit_delay_ms: u32, subject_placeholder: &str) -> Self {
        Self {
            fields: Self::blank(subject_placeholder),
            errors: FieldErrors::default(),
            phase: Phase::Idle,
            submit_delay_ms,
            subject_placeholder: subject_placeholder.to_string(),
            notice: None,
            notices_raised: 0,
        }
    }

    fn blank(subject_placeholder: &str) -> ContactFields {
        ContactFields {
            subject: subject_placeholder.to_string(),
            ..ContactFields::default()
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> FieldErrors {
        self.errors
    }

    pub fn is_sending(&self) -> bool {
        self.phase == Phase::Sending
    }

    /// Button text: the idle label, or "Sending..." while the send is pending.
    pub fn submit_label<'a>(&self, idle_label: &'a str) -> &'a str {
        match self.phase {
            Phase::Idle => idle_label,
            Phase::Sending => SENDING_LABEL,
        }
    }

    /// Latest notice and a counter that bumps each time a new one is raised.
    pub fn notice(&self) -> (u64, Option<&Notice>) {
        (self.notices_raised, self.notice.as_ref())
    }

    fn raise(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.notices_raised += 1;
    }

    pub fn submit(&mut self, timers: &mut dyn Scheduler<ContactMsg>) -> bool {
        if self.is_sending() {
            return false;
        }
        self.errors = validate(&self.fields, &self.subject_placeholder);
        if self.errors.any() {
            log::debug!("Contact form rejected with {} invalid fields", self.errors.count());
            self.raise(Notice::error(REJECTED_MESSAGE));
            return true;
        }
        log::debug!("Contact form accepted, sending");
        self.phase = Phase::Sending;
        timers.after(self.submit_delay_ms, ContactMsg::Sent);
        true
    }

    fn finish(&mut self) -> bool {
        if !self.is_sending() {
            return false;
        }
        self.fields = Self::blank(&self.subject_placeholder);
        self.errors = FieldErrors::default();
        self.phase = Phase::Idle;
        self.raise(Notice::success(SENT_MESSAGE));
        true
    }
}

impl Controller for ContactForm {
    type Msg = ContactMsg;

    fn update(&mut self, msg: ContactMsg, timers: &mut dyn Scheduler<ContactMsg>) -> bool {
        match msg {
            ContactMsg::Edit(field, value) => {
                self.fields.set(field, value);
                true
            }
            ContactMsg::Submit => self.submit(timers),
            ContactMsg::Sent => self.finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::VirtualScheduler;
    use crate::widgets::notify::Severity;

    fn form() -> (ContactForm, VirtualScheduler<ContactMsg>) {
        (ContactForm::new(1200, ""), VirtualScheduler::new())
    }

    fn fill(form: &mut ContactForm, timers: &mut VirtualScheduler<ContactMsg>) {
        for (field, value) in [
            (Field::Name, "Ada"),
            (Field::Email, " ada@example.org "),
            (Field::Subject, "membership"),
            (Field::Message, "Hello club"),
        ] {
            form.update(ContactMsg::Edit(field, value.to_string()), timers);
        }
    }

    fn run(form: &mut ContactForm, timers: &mut VirtualScheduler<ContactMsg>, ms: u64) {
        timers.advance_with(ms, |msg, t| {
            form.update(msg, t);
        });
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@c.d"));
        assert!(!is_valid_email("a@@c.d"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let fields = ContactFields {
            name: "   ".into(),
            email: "x@y.z".into(),
            subject: "general".into(),
            message: "\n\t".into(),
        };
        let errors = validate(&fields, "");
        assert!(errors.name && errors.message);
        assert!(!errors.email && !errors.subject);
    }

    #[test]
    fn empty_submit_flags_every_field_and_raises_one_error() {
        let (mut form, mut timers) = form();
        form.update(ContactMsg::Submit, &mut timers);

        assert_eq!(form.errors().count(), 4);
        assert!(!form.is_sending());
        assert_eq!(timers.pending(), 0);
        let (raised, notice) = form.notice();
        assert_eq!(raised, 1);
        assert_eq!(notice.map(|n| n.severity), Some(Severity::Error));
    }

    #[test]
    fn rejected_submit_keeps_field_values() {
        let (mut form, mut timers) = form();
        form.update(ContactMsg::Edit(Field::Name, "Ada".into()), &mut timers);
        form.update(ContactMsg::Edit(Field::Email, "not-an-email".into()), &mut timers);
        form.update(ContactMsg::Submit, &mut timers);

        assert_eq!(form.fields().name, "Ada");
        assert!(!form.errors().name);
        assert!(form.errors().email);
    }

    #[test]
    fn valid_submit_sends_then_resets() {
        let (mut form, mut timers) = form();
        fill(&mut form, &mut timers);
        form.update(ContactMsg::Submit, &mut timers);

        assert!(!form.errors().any());
        assert!(form.is_sending());
        assert_eq!(form.submit_label("Send Message"), "Sending...");
        assert_eq!(form.notice().0, 0);

        // A second click while sending does nothing.
        assert!(!form.update(ContactMsg::Submit, &mut timers));
        assert_eq!(timers.pending(), 1);

        run(&mut form, &mut timers, 1199);
        assert!(form.is_sending());
        run(&mut form, &mut timers, 1);

        assert!(!form.is_sending());
        assert_eq!(form.submit_label("Send Message"), "Send Message");
        assert_eq!(form.fields(), &ContactFields::default());
        let (raised, notice) = form.notice();
        assert_eq!(raised, 1);
        assert_eq!(notice.map(|n| n.message.as_str()), Some(SENT_MESSAGE));
    }

    #[test]
    fn errors_clear_after_a_successful_send() {
        let (mut form, mut timers) = form();
        form.update(ContactMsg::Submit, &mut timers);
        assert!(form.errors().any());

        fill(&mut form, &mut timers);
        form.update(ContactMsg::Submit, &mut timers);
        run(&mut form, &mut timers, 1200);

        assert!(!form.errors().any());
        assert_eq!(form.notice().0, 2);
    }

    #[test]
    fn send_returns_a_chosen_subject_to_the_placeholder() {
        let mut form = ContactForm::new(1200, "choose");
        let mut timers = VirtualScheduler::<ContactMsg>::new();
        fill(&mut form, &mut timers);
        assert_eq!(form.fields().subject, "membership");

        form.update(ContactMsg::Submit, &mut timers);
        run(&mut form, &mut timers, 1200);
        assert_eq!(form.fields().subject, "choose");
    }

    #[test]
    fn custom_subject_placeholder_is_treated_as_unselected() {
        let mut form = ContactForm::new(1200, "choose");
        let mut timers = VirtualScheduler::<ContactMsg>::new();
        assert_eq!(form.fields().subject, "choose");
        form.update(ContactMsg::Submit, &mut timers);
        assert!(form.errors().subject);
    }
}
