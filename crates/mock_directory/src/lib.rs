//! Builtin demo directory for EduManage.
//!
//! This crate provides the static, read-only directory of known
//! identities, the mock fixtures the dashboards are rendered from,
//! and the demo credential check.

use std::sync::OnceLock;

use chrono::NaiveDate;
use core_types::{
    Attendance, AttendanceStatus, Batch, Gender, Identity, MaterialKind, Notification,
    NotificationKind, Payment, PaymentStatus, Profile, Role, StudentRecord, StudyMaterial,
    TeacherRecord,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The one shared password every demo identity accepts.
///
/// Documented demo behavior, not a credential store.
pub const DEMO_PASSWORD: &str = "password123";

/// Errors from fixture loading.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// The full in-memory data set backing the dashboards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Directory {
    pub teachers: Vec<TeacherRecord>,
    pub students: Vec<StudentRecord>,
    pub batches: Vec<Batch>,
    pub materials: Vec<StudyMaterial>,
    pub attendance: Vec<Attendance>,
    pub payments: Vec<Payment>,
    pub notifications: Vec<Notification>,
}

impl Directory {
    /// Check credentials against the claimed-role partition.
    ///
    /// Returns the matching identity only when the identifier is known
    /// within that partition and the password matches [`DEMO_PASSWORD`]
    /// exactly. An unknown identifier and a wrong password return the
    /// same `None`: callers cannot distinguish the two.
    pub fn authenticate(&self, id: &str, password: &str, claimed_role: Role) -> Option<Identity> {
        if password != DEMO_PASSWORD {
            return None;
        }
        match claimed_role {
            Role::Teacher => self
                .teachers
                .iter()
                .find(|teacher| teacher.profile.id == id)
                .cloned()
                .map(Identity::Teacher),
            Role::Student => self
                .students
                .iter()
                .find(|student| student.profile.id == id)
                .cloned()
                .map(Identity::Student),
        }
    }

    /// Look up a teacher by id.
    pub fn teacher_by_id(&self, id: &str) -> Option<&TeacherRecord> {
        self.teachers.iter().find(|teacher| teacher.profile.id == id)
    }

    /// Look up a student by id.
    pub fn student_by_id(&self, id: &str) -> Option<&StudentRecord> {
        self.students.iter().find(|student| student.profile.id == id)
    }

    /// Batches run by the given teacher.
    pub fn batches_for_teacher(&self, teacher_id: &str) -> Vec<&Batch> {
        self.batches
            .iter()
            .filter(|batch| batch.teacher_id == teacher_id)
            .collect()
    }

    /// Batches the given student is enrolled in.
    pub fn batches_for_student(&self, student_id: &str) -> Vec<&Batch> {
        self.batches
            .iter()
            .filter(|batch| batch.enrolls(student_id))
            .collect()
    }

    /// Students enrolled in any of the given batches.
    pub fn students_in<'a>(&'a self, batches: &[&Batch]) -> Vec<&'a StudentRecord> {
        self.students
            .iter()
            .filter(|student| batches.iter().any(|batch| batch.enrolls(&student.profile.id)))
            .collect()
    }

    /// Study materials belonging to any of the given batches.
    pub fn materials_for<'a>(&'a self, batches: &[&Batch]) -> Vec<&'a StudyMaterial> {
        self.materials
            .iter()
            .filter(|material| batches.iter().any(|batch| batch.id == material.batch_id))
            .collect()
    }

    /// Payments owed for any of the given batches.
    pub fn payments_for_batches<'a>(&'a self, batches: &[&Batch]) -> Vec<&'a Payment> {
        self.payments
            .iter()
            .filter(|payment| batches.iter().any(|batch| batch.id == payment.batch_id))
            .collect()
    }

    /// Payments owed by the given student.
    pub fn payments_for_student(&self, student_id: &str) -> Vec<&Payment> {
        self.payments
            .iter()
            .filter(|payment| payment.student_id == student_id)
            .collect()
    }

    /// Attendance records of the given student.
    pub fn attendance_for_student(&self, student_id: &str) -> Vec<&Attendance> {
        self.attendance
            .iter()
            .filter(|record| record.student_id == student_id)
            .collect()
    }

    /// Notifications visible given a set of batches: batch-scoped ones
    /// matching the set, plus global ones with no batch.
    pub fn notifications_for<'a>(&'a self, batches: &[&Batch]) -> Vec<&'a Notification> {
        self.notifications
            .iter()
            .filter(|notification| match &notification.batch_id {
                None => true,
                Some(batch_id) => batches.iter().any(|batch| &batch.id == batch_id),
            })
            .collect()
    }
}

/// Shared builtin directory, built on first access.
pub fn builtin() -> &'static Directory {
    static DIRECTORY: OnceLock<Directory> = OnceLock::new();
    DIRECTORY.get_or_init(load_builtin_directory)
}

/// Build the builtin demo directory.
pub fn load_builtin_directory() -> Directory {
    Directory {
        teachers: builtin_teachers(),
        students: builtin_students(),
        batches: builtin_batches(),
        materials: builtin_materials(),
        attendance: builtin_attendance(),
        payments: builtin_payments(),
        notifications: builtin_notifications(),
    }
}

/// Load a directory from a JSON string (fixture overrides in demos).
pub fn load_directory_from_json(json: &str) -> Result<Directory> {
    Ok(serde_json::from_str(json)?)
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn builtin_teachers() -> Vec<TeacherRecord> {
    vec![TeacherRecord {
        profile: Profile {
            id: "teacher1".to_string(),
            name: "Dr. Priya Sharma".to_string(),
            email: "priya.sharma@edu.com".to_string(),
            photo: Some(
                "https://images.unsplash.com/photo-1494790108755-2616c4d1e0fe?w=150&h=150&fit=crop&crop=face"
                    .to_string(),
            ),
            phone: "+91 9876543210".to_string(),
            whatsapp: "+91 9876543210".to_string(),
            date_of_birth: ymd(1985, 5, 15),
            gender: Gender::Female,
            address: "123 Education Street".to_string(),
            district: Some("Mumbai".to_string()),
            state: Some("Maharashtra".to_string()),
            pincode: "400001".to_string(),
        },
        social_links: vec!["linkedin.com/in/priyasharma".to_string()],
        subjects: vec!["Mathematics".to_string(), "Physics".to_string()],
        classes: vec![
            "Class 10".to_string(),
            "Class 11".to_string(),
            "Class 12".to_string(),
        ],
        board: "CBSE".to_string(),
        university: "University of Mumbai".to_string(),
    }]
}

fn builtin_students() -> Vec<StudentRecord> {
    vec![
        StudentRecord {
            profile: Profile {
                id: "student1".to_string(),
                name: "Rahul Verma".to_string(),
                email: "rahul.verma@student.com".to_string(),
                photo: Some(
                    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face"
                        .to_string(),
                ),
                phone: "+91 9876543211".to_string(),
                whatsapp: "+91 9876543211".to_string(),
                date_of_birth: ymd(2006, 8, 20),
                gender: Gender::Male,
                address: "456 Student Lane".to_string(),
                district: None,
                state: None,
                pincode: "400002".to_string(),
            },
            class_name: "Class 12".to_string(),
            year: "2024".to_string(),
            institution: "St. Xavier's High School".to_string(),
            parents_name: "Mr. Suresh Verma".to_string(),
            parents_phone: "+91 9876543212".to_string(),
        },
        StudentRecord {
            profile: Profile {
                id: "student2".to_string(),
                name: "Ananya Patel".to_string(),
                email: "ananya.patel@student.com".to_string(),
                photo: Some(
                    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=face"
                        .to_string(),
                ),
                phone: "+91 9876543213".to_string(),
                whatsapp: "+91 9876543213".to_string(),
                date_of_birth: ymd(2007, 3, 10),
                gender: Gender::Female,
                address: "789 Learning Avenue".to_string(),
                district: None,
                state: None,
                pincode: "400003".to_string(),
            },
            class_name: "Class 11".to_string(),
            year: "2024".to_string(),
            institution: "Delhi Public School".to_string(),
            parents_name: "Mrs. Kavita Patel".to_string(),
            parents_phone: "+91 9876543214".to_string(),
        },
    ]
}

fn builtin_batches() -> Vec<Batch> {
    vec![
        Batch {
            id: "batch1".to_string(),
            name: "Advanced Mathematics - Class 12".to_string(),
            teacher_id: "teacher1".to_string(),
            subject: "Mathematics".to_string(),
            class_name: "Class 12".to_string(),
            board: "CBSE".to_string(),
            students: vec!["student1".to_string()],
            schedule: "Mon, Wed, Fri - 4:00 PM to 6:00 PM".to_string(),
            description: "Comprehensive mathematics course covering calculus, algebra, and geometry for Class 12 CBSE students.".to_string(),
        },
        Batch {
            id: "batch2".to_string(),
            name: "Physics Fundamentals - Class 11".to_string(),
            teacher_id: "teacher1".to_string(),
            subject: "Physics".to_string(),
            class_name: "Class 11".to_string(),
            board: "CBSE".to_string(),
            students: vec!["student2".to_string()],
            schedule: "Tue, Thu, Sat - 2:00 PM to 4:00 PM".to_string(),
            description: "Foundation physics course covering mechanics, thermodynamics, and waves for Class 11 students.".to_string(),
        },
    ]
}

fn builtin_materials() -> Vec<StudyMaterial> {
    vec![
        StudyMaterial {
            id: "material1".to_string(),
            batch_id: "batch1".to_string(),
            title: "Calculus - Integration Techniques".to_string(),
            kind: MaterialKind::Pdf,
            url: "#".to_string(),
            upload_date: ymd(2024, 1, 15),
            description: "Comprehensive guide on integration techniques with solved examples.".to_string(),
        },
        StudyMaterial {
            id: "material2".to_string(),
            batch_id: "batch1".to_string(),
            title: "Coordinate Geometry - Video Lecture".to_string(),
            kind: MaterialKind::Video,
            url: "#".to_string(),
            upload_date: ymd(2024, 1, 10),
            description: "Video lecture explaining coordinate geometry concepts with visual aids.".to_string(),
        },
        StudyMaterial {
            id: "material3".to_string(),
            batch_id: "batch2".to_string(),
            title: "Laws of Motion - Notes".to_string(),
            kind: MaterialKind::Document,
            url: "#".to_string(),
            upload_date: ymd(2024, 1, 12),
            description: "Detailed notes on Newton's laws of motion with practical examples.".to_string(),
        },
    ]
}

fn builtin_attendance() -> Vec<Attendance> {
    vec![
        Attendance {
            id: "att1".to_string(),
            batch_id: "batch1".to_string(),
            student_id: "student1".to_string(),
            date: ymd(2024, 1, 15),
            status: AttendanceStatus::Present,
        },
        Attendance {
            id: "att2".to_string(),
            batch_id: "batch1".to_string(),
            student_id: "student1".to_string(),
            date: ymd(2024, 1, 17),
            status: AttendanceStatus::Present,
        },
        Attendance {
            id: "att3".to_string(),
            batch_id: "batch2".to_string(),
            student_id: "student2".to_string(),
            date: ymd(2024, 1, 16),
            status: AttendanceStatus::Present,
        },
    ]
}

fn builtin_payments() -> Vec<Payment> {
    vec![
        Payment {
            id: "pay1".to_string(),
            student_id: "student1".to_string(),
            batch_id: "batch1".to_string(),
            amount: 5000,
            status: PaymentStatus::Paid,
            due_date: ymd(2024, 1, 1),
            paid_date: Some(ymd(2023, 12, 28)),
        },
        Payment {
            id: "pay2".to_string(),
            student_id: "student2".to_string(),
            batch_id: "batch2".to_string(),
            amount: 4500,
            status: PaymentStatus::Pending,
            due_date: ymd(2024, 2, 1),
            paid_date: None,
        },
    ]
}

fn builtin_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "notif1".to_string(),
            title: "New Assignment Uploaded".to_string(),
            message: "A new assignment has been uploaded for Advanced Mathematics batch.".to_string(),
            date: ymd(2024, 1, 15),
            kind: NotificationKind::Info,
            batch_id: Some("batch1".to_string()),
        },
        Notification {
            id: "notif2".to_string(),
            title: "Payment Reminder".to_string(),
            message: "Your monthly fee payment is due on February 1st, 2024.".to_string(),
            date: ymd(2024, 1, 20),
            kind: NotificationKind::Warning,
            batch_id: None,
        },
        Notification {
            id: "notif3".to_string(),
            title: "Test Scheduled".to_string(),
            message: "Unit test for Physics Fundamentals is scheduled for next week.".to_string(),
            date: ymd(2024, 1, 18),
            kind: NotificationKind::Info,
            batch_id: Some("batch2".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_known_teacher() {
        let directory = load_builtin_directory();

        let identity = directory
            .authenticate("teacher1", DEMO_PASSWORD, Role::Teacher)
            .expect("teacher1 should authenticate");

        assert_eq!(identity.role(), Role::Teacher);
        assert_eq!(identity.id(), "teacher1");
        assert_eq!(identity.name(), "Dr. Priya Sharma");
    }

    #[test]
    fn test_authenticate_known_student() {
        let directory = load_builtin_directory();

        let identity = directory
            .authenticate("student1", DEMO_PASSWORD, Role::Student)
            .expect("student1 should authenticate");

        assert_eq!(identity.role(), Role::Student);
        assert_eq!(identity.id(), "student1");
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let directory = load_builtin_directory();

        assert_eq!(directory.authenticate("teacher1", "wrong", Role::Teacher), None);
        assert_eq!(directory.authenticate("student1", "", Role::Student), None);
    }

    #[test]
    fn test_authenticate_unknown_identifier() {
        let directory = load_builtin_directory();

        assert_eq!(
            directory.authenticate("teacher99", DEMO_PASSWORD, Role::Teacher),
            None
        );
    }

    #[test]
    fn test_authenticate_checks_claimed_role_partition() {
        let directory = load_builtin_directory();

        // A valid identifier under the wrong claimed role fails the
        // same way an unknown one does.
        assert_eq!(
            directory.authenticate("teacher1", DEMO_PASSWORD, Role::Student),
            None
        );
        assert_eq!(
            directory.authenticate("student1", DEMO_PASSWORD, Role::Teacher),
            None
        );
    }

    #[test]
    fn test_lookup_by_id() {
        let directory = load_builtin_directory();

        assert!(directory.teacher_by_id("teacher1").is_some());
        assert!(directory.teacher_by_id("student1").is_none());
        assert_eq!(
            directory.student_by_id("student2").map(|s| s.profile.name.as_str()),
            Some("Ananya Patel")
        );
    }

    #[test]
    fn test_batches_for_teacher() {
        let directory = load_builtin_directory();

        let batches = directory.batches_for_teacher("teacher1");
        assert_eq!(batches.len(), 2);

        assert!(directory.batches_for_teacher("teacher99").is_empty());
    }

    #[test]
    fn test_batches_for_student() {
        let directory = load_builtin_directory();

        let batches = directory.batches_for_student("student1");
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].id, "batch1");
    }

    #[test]
    fn test_students_in_batches() {
        let directory = load_builtin_directory();

        let batches = directory.batches_for_teacher("teacher1");
        let students = directory.students_in(&batches);

        assert_eq!(students.len(), 2);
    }

    #[test]
    fn test_materials_scoped_to_batches() {
        let directory = load_builtin_directory();

        let batches = directory.batches_for_student("student1");
        let materials = directory.materials_for(&batches);

        assert_eq!(materials.len(), 2);
        assert!(materials.iter().all(|material| material.batch_id == "batch1"));
    }

    #[test]
    fn test_notifications_include_global_ones() {
        let directory = load_builtin_directory();

        let batches = directory.batches_for_student("student1");
        let notifications = directory.notifications_for(&batches);

        // batch1's notification plus the global payment reminder.
        assert_eq!(notifications.len(), 2);
        assert!(notifications.iter().any(|n| n.batch_id.is_none()));
    }

    #[test]
    fn test_payments_queries() {
        let directory = load_builtin_directory();

        let batches = directory.batches_for_teacher("teacher1");
        assert_eq!(directory.payments_for_batches(&batches).len(), 2);
        assert_eq!(directory.payments_for_student("student2").len(), 1);
    }

    #[test]
    fn test_attendance_for_student() {
        let directory = load_builtin_directory();

        assert_eq!(directory.attendance_for_student("student1").len(), 2);
        assert_eq!(directory.attendance_for_student("student2").len(), 1);
    }

    #[test]
    fn test_json_round_trip() {
        let directory = load_builtin_directory();

        let json = serde_json::to_string(&directory).unwrap();
        let parsed = load_directory_from_json(&json).unwrap();

        assert_eq!(parsed, directory);
    }

    #[test]
    fn test_json_loader_rejects_garbage() {
        assert!(load_directory_from_json("not json").is_err());
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(builtin(), builtin()));
    }
}
