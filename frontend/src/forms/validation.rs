use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const REQUIRED: &str = "This field is required";
pub const NAME_TOO_SHORT: &str = "Name is too short";
pub const INVALID_PHONE: &str = "Invalid phone number";
pub const INVALID_EMAIL: &str = "Invalid email address";

static BOOKING_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0\d{1,2}[-\s]?\d{7,8}$").expect("booking phone pattern"));
static CONTACT_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{9,10}$").expect("contact phone pattern"));
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern")
});
static NEWSLETTER_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("newsletter email pattern"));

fn required(value: &str) -> Option<&'static str> {
    value.trim().is_empty().then_some(REQUIRED)
}

fn matching(value: &str, pattern: &Regex, message: &'static str) -> Option<&'static str> {
    required(value).or_else(|| (!pattern.is_match(value.trim())).then_some(message))
}

pub fn validate_email(value: &str) -> Option<&'static str> {
    matching(value, &EMAIL, INVALID_EMAIL)
}

pub fn is_valid_newsletter_email(value: &str) -> bool {
    NEWSLETTER_EMAIL.is_match(value)
}

#[derive(Clone, PartialEq, Debug)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub guests: u8,
    pub special_requests: String,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            guests: 2,
            special_requests: String::new(),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct BookingErrors {
    pub name: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl BookingErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }
}

/// What the booking form sends once a date and a time slot are picked.
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub guests: u8,
    pub special_requests: String,
    pub date: chrono::NaiveDate,
    pub time: String,
}

impl BookingForm {
    pub fn validate(&self) -> BookingErrors {
        BookingErrors {
            name: required(&self.name).or_else(|| {
                (self.name.trim().chars().count() < 2).then_some(NAME_TOO_SHORT)
            }),
            phone: matching(&self.phone, &BOOKING_PHONE, INVALID_PHONE),
            email: validate_email(&self.email),
        }
    }

    pub fn into_submission(self, date: chrono::NaiveDate, time: String) -> BookingSubmission {
        BookingSubmission {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            guests: self.guests,
            special_requests: self.special_requests,
            date,
            time,
        }
    }
}

#[derive(Serialize, Clone, PartialEq, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ContactErrors {
    pub name: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none() && self.message.is_none()
    }
}

impl ContactForm {
    pub fn validate(&self) -> ContactErrors {
        ContactErrors {
            name: required(&self.name),
            phone: matching(&self.phone, &CONTACT_PHONE, INVALID_PHONE),
            email: validate_email(&self.email),
            message: required(&self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filled_booking() -> BookingForm {
        BookingForm {
            name: "Dana".into(),
            phone: "050-1234567".into(),
            email: "dana@example.com".into(),
            ..BookingForm::default()
        }
    }

    #[test]
    fn complete_booking_passes() {
        assert!(filled_booking().validate().is_empty());
    }

    #[test]
    fn booking_reports_every_field() {
        let errors = BookingForm::default().validate();
        assert_eq!(errors.name, Some(REQUIRED));
        assert_eq!(errors.phone, Some(REQUIRED));
        assert_eq!(errors.email, Some(REQUIRED));
    }

    #[test]
    fn booking_name_needs_two_characters() {
        let form = BookingForm { name: "D".into(), ..filled_booking() };
        assert_eq!(form.validate().name, Some(NAME_TOO_SHORT));
    }

    #[test]
    fn booking_phone_formats() {
        for ok in ["050-1234567", "03 1234567", "0501234567", "02-12345678"] {
            let form = BookingForm { phone: ok.into(), ..filled_booking() };
            assert_eq!(form.validate().phone, None, "{ok}");
        }
        for bad in ["501234567", "050--1234567", "050-12345", "phone"] {
            let form = BookingForm { phone: bad.into(), ..filled_booking() };
            assert_eq!(form.validate().phone, Some(INVALID_PHONE), "{bad}");
        }
    }

    #[test]
    fn email_is_case_insensitive() {
        assert_eq!(validate_email("Someone@Cafe.CO.IL"), None);
        assert_eq!(validate_email("someone@cafe"), Some(INVALID_EMAIL));
        assert_eq!(validate_email("   "), Some(REQUIRED));
    }

    #[test]
    fn contact_phone_is_digits_only() {
        let form = ContactForm {
            name: "Dana".into(),
            phone: "0501234567".into(),
            email: "dana@example.com".into(),
            message: "Hi".into(),
        };
        assert!(form.validate().is_empty());
        let form = ContactForm { phone: "050-1234567".into(), ..form };
        assert_eq!(form.validate().phone, Some(INVALID_PHONE));
    }

    #[test]
    fn contact_message_is_required() {
        let errors = ContactForm::default().validate();
        assert_eq!(errors.message, Some(REQUIRED));
        assert!(!errors.is_empty());
    }

    #[test]
    fn newsletter_email_is_loose() {
        assert!(is_valid_newsletter_email("a@b.c"));
        assert!(!is_valid_newsletter_email("a b@c.d"));
        assert!(!is_valid_newsletter_email("missing-at.com"));
    }

    #[test]
    fn booking_submission_serializes_date_as_iso() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let submission = filled_booking().into_submission(date, "09:30".into());
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["date"], "2025-03-07");
        assert_eq!(json["time"], "09:30");
        assert_eq!(json["guests"], 2);
        assert_eq!(json["specialRequests"], "");
    }
}
