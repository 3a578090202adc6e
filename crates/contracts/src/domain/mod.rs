pub mod a001_news;
pub mod a002_application;
pub mod a003_booking;
pub mod a004_contact;
pub mod a005_facility;
pub mod a006_achievement;
pub mod a007_student;
pub mod a008_teacher;
pub mod common;
