//! Core types for the EduManage tutoring dashboard.
//!
//! This crate defines the shared data structures used across
//! the mock directory, session handling, and frontend components.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// User role within the product.
///
/// Every role-dependent decision matches exhaustively on this enum,
/// so adding a role is a compile-time checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Teacher,
    Student,
}

impl Role {
    /// Human-readable label for badges and headings.
    pub fn label(self) -> &'static str {
        match self {
            Role::Teacher => "Teacher",
            Role::Student => "Student",
        }
    }
}

/// Gender of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Contact and personal details shared by teachers and students.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Login identifier (e.g. "teacher1").
    pub id: String,
    pub name: String,
    pub email: String,
    /// Avatar URL, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub phone: String,
    pub whatsapp: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub pincode: String,
}

impl Profile {
    /// Initials used for avatar fallbacks ("Priya Sharma" -> "PS").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// A teacher identity with teaching credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherRecord {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<String>,
    pub subjects: Vec<String>,
    pub classes: Vec<String>,
    pub board: String,
    pub university: String,
}

/// A student identity with academic details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(rename = "class")]
    pub class_name: String,
    pub year: String,
    pub institution: String,
    pub parents_name: String,
    pub parents_phone: String,
}

/// An authenticated principal.
///
/// The variant fixes the role: an identity never changes role after
/// authentication, only a fresh login can produce a different one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Identity {
    Teacher(TeacherRecord),
    Student(StudentRecord),
}

impl Identity {
    /// Role of this principal.
    pub fn role(&self) -> Role {
        match self {
            Identity::Teacher(_) => Role::Teacher,
            Identity::Student(_) => Role::Student,
        }
    }

    /// Shared profile fields of either variant.
    pub fn profile(&self) -> &Profile {
        match self {
            Identity::Teacher(teacher) => &teacher.profile,
            Identity::Student(student) => &student.profile,
        }
    }

    /// Login identifier.
    pub fn id(&self) -> &str {
        &self.profile().id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.profile().name
    }
}

/// A teaching batch: one subject taught to a group of students on a
/// recurring schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub id: String,
    pub name: String,
    /// Id of the teacher running this batch.
    pub teacher_id: String,
    pub subject: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub board: String,
    /// Ids of enrolled students.
    pub students: Vec<String>,
    pub schedule: String,
    pub description: String,
}

impl Batch {
    /// Whether the given student is enrolled in this batch.
    pub fn enrolls(&self, student_id: &str) -> bool {
        self.students.iter().any(|id| id == student_id)
    }
}

/// Kind of a study material upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    Pdf,
    Video,
    Document,
}

impl MaterialKind {
    /// Uppercase badge text.
    pub fn label(self) -> &'static str {
        match self {
            MaterialKind::Pdf => "PDF",
            MaterialKind::Video => "VIDEO",
            MaterialKind::Document => "DOCUMENT",
        }
    }
}

/// A study material shared with a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyMaterial {
    pub id: String,
    pub batch_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    pub url: String,
    pub upload_date: NaiveDate,
    pub description: String,
}

/// Attendance outcome for one student on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

/// One attendance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: String,
    pub batch_id: String,
    pub student_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Payment state of a fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

/// A fee payment owed by a student for a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub student_id: String,
    pub batch_id: String,
    /// Amount in whole rupees.
    pub amount: u32,
    pub status: PaymentStatus,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<NaiveDate>,
}

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Warning,
    Success,
}

impl NotificationKind {
    /// Lowercase badge text.
    pub fn label(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
            NotificationKind::Success => "success",
        }
    }
}

/// An announcement shown on the dashboards.
///
/// A notification without a `batch_id` is visible to everyone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile(id: &str, name: &str) -> Profile {
        Profile {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{id}@example.com"),
            photo: None,
            phone: "+91 9000000000".to_string(),
            whatsapp: "+91 9000000000".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            gender: Gender::Other,
            address: "1 Test Street".to_string(),
            district: None,
            state: None,
            pincode: "400001".to_string(),
        }
    }

    fn sample_student(id: &str, name: &str) -> StudentRecord {
        StudentRecord {
            profile: sample_profile(id, name),
            class_name: "Class 12".to_string(),
            year: "2024".to_string(),
            institution: "Test School".to_string(),
            parents_name: "Parent".to_string(),
            parents_phone: "+91 9000000001".to_string(),
        }
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Teacher).unwrap(), "\"teacher\"");
        assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");

        let parsed: Role = serde_json::from_str("\"teacher\"").unwrap();
        assert_eq!(parsed, Role::Teacher);
    }

    #[test]
    fn test_identity_role_tag() {
        let identity = Identity::Student(sample_student("student9", "Test Student"));

        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["role"], "student");
        assert_eq!(json["id"], "student9");

        let parsed: Identity = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, identity);
        assert_eq!(parsed.role(), Role::Student);
    }

    #[test]
    fn test_identity_accessors() {
        let identity = Identity::Student(sample_student("student9", "Test Student"));

        assert_eq!(identity.id(), "student9");
        assert_eq!(identity.name(), "Test Student");
        assert_eq!(identity.profile().pincode, "400001");
    }

    #[test]
    fn test_profile_initials() {
        let profile = sample_profile("t1", "Priya Sharma");
        assert_eq!(profile.initials(), "PS");

        let single = sample_profile("t2", "Cher");
        assert_eq!(single.initials(), "C");
    }

    #[test]
    fn test_batch_enrolls() {
        let batch = Batch {
            id: "batch1".to_string(),
            name: "Test Batch".to_string(),
            teacher_id: "teacher1".to_string(),
            subject: "Mathematics".to_string(),
            class_name: "Class 12".to_string(),
            board: "CBSE".to_string(),
            students: vec!["student1".to_string()],
            schedule: "Mon - 4 PM".to_string(),
            description: "Test".to_string(),
        };

        assert!(batch.enrolls("student1"));
        assert!(!batch.enrolls("student2"));
    }

    #[test]
    fn test_status_enums_round_trip() {
        for status in [
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Late,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let parsed: AttendanceStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, status);
        }

        for status in [
            PaymentStatus::Paid,
            PaymentStatus::Pending,
            PaymentStatus::Overdue,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let parsed: PaymentStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_material_kind_rename() {
        let material = StudyMaterial {
            id: "material1".to_string(),
            batch_id: "batch1".to_string(),
            title: "Notes".to_string(),
            kind: MaterialKind::Pdf,
            url: "#".to_string(),
            upload_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            description: "Test".to_string(),
        };

        let json = serde_json::to_value(&material).unwrap();
        assert_eq!(json["type"], "pdf");
    }
}
