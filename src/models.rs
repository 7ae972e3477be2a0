/// Data models for the hospital front desk.
///
/// This module defines the core data structures used throughout the system:
/// - Priority: Urgency ladder for scheduling requests
/// - PatientId / SlotKey: Typed identifiers
/// - Patient: Registered patient record with medical history
/// - Doctor: Doctor record with an hourly slot table
/// - EmergencyRequest: Queued urgent scheduling request

use crate::error::HospitalError;
use chrono::{DateTime, Local};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// First hourly slot of the working day.
pub const OPENING_HOUR: u32 = 9;
/// Last hourly slot of the working day (inclusive).
pub const CLOSING_HOUR: u32 = 17;

/// Patient identifiers start here and increase by one per registration.
pub const FIRST_PATIENT_ID: u32 = 1000;

/// Priority levels for scheduling requests.
///
/// Higher numeric values indicate higher priority. The emergency queue
/// currently only ever receives `Emergency`, but the queue orders by
/// priority first, so the full ladder is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Routine = 1,
    Urgent = 2,
    Emergency = 3,
}

impl Priority {
    pub fn name(&self) -> &str {
        match self {
            Priority::Routine => "ROUTINE",
            Priority::Urgent => "URGENT",
            Priority::Emergency => "EMERGENCY",
        }
    }
}

/// Sequential patient identifier, unique for the whole run, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatientId(pub u32);

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One hourly booking unit, keyed by its textual hour mark ("9:00".."17:00").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey(u32);

impl SlotKey {
    /// Create a slot key, validating it falls within working hours.
    pub fn new(hour: u32) -> Result<Self, HospitalError> {
        if !(OPENING_HOUR..=CLOSING_HOUR).contains(&hour) {
            return Err(HospitalError::InputError(format!(
                "Hour {} is outside working hours ({}:00 - {}:00)",
                hour, OPENING_HOUR, CLOSING_HOUR
            )));
        }
        Ok(SlotKey(hour))
    }

    pub fn hour(&self) -> u32 {
        self.0
    }

    /// All slot keys in ascending hour order.
    pub fn all() -> impl Iterator<Item = SlotKey> {
        (OPENING_HOUR..=CLOSING_HOUR).map(SlotKey)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:00", self.0)
    }
}

impl FromStr for SlotKey {
    type Err = HospitalError;

    /// Parse the canonical hour mark, e.g. "9:00" or "14:00".
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let hour = value
            .trim()
            .strip_suffix(":00")
            .and_then(|h| h.parse::<u32>().ok())
            .ok_or_else(|| {
                HospitalError::InputError(format!(
                    "Invalid time '{}'. Expected an hour mark like 9:00",
                    value
                ))
            })?;
        SlotKey::new(hour)
    }
}

/// Represents a registered patient.
#[derive(Debug, Clone)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub age: i32,
    pub contact: String,
    pub blood_group: String,
    medical_history: Vec<String>,
    pub registered_at: DateTime<Local>,
}

impl Patient {
    pub fn new(id: PatientId, name: String, age: i32, contact: String, blood_group: String) -> Self {
        Patient {
            id,
            name,
            age,
            contact,
            blood_group,
            medical_history: Vec::new(),
            registered_at: Local::now(),
        }
    }

    /// Append a free-text entry to the medical history.
    pub fn add_record(&mut self, record: String) {
        self.medical_history.push(record);
    }

    pub fn medical_history(&self) -> &[String] {
        &self.medical_history
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Patient ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Age: {}", self.age)?;
        writeln!(f, "Contact: {}", self.contact)?;
        writeln!(f, "Blood Group: {}", self.blood_group)?;
        writeln!(
            f,
            "Registered: {}",
            self.registered_at.format("%Y-%m-%d %H:%M")
        )?;
        write!(f, "Medical History:")?;
        for record in &self.medical_history {
            write!(f, "\n- {}", record)?;
        }
        Ok(())
    }
}

/// Represents a doctor with a fixed table of hourly slots.
///
/// Each slot flips from free to booked at most once; there is no
/// cancellation path.
#[derive(Debug, Clone)]
pub struct Doctor {
    pub name: String,
    pub age: i32,
    pub contact: String,
    pub specialization: String,
    slots: BTreeMap<SlotKey, bool>,
}

impl Doctor {
    /// Create a doctor with every slot available.
    pub fn new(name: String, age: i32, contact: String, specialization: String) -> Self {
        Doctor {
            name,
            age,
            contact,
            specialization,
            slots: SlotKey::all().map(|slot| (slot, true)).collect(),
        }
    }

    /// Book a slot. Returns false if the slot is already booked.
    pub fn book(&mut self, slot: SlotKey) -> bool {
        match self.slots.get_mut(&slot) {
            Some(available) if *available => {
                *available = false;
                true
            }
            _ => false,
        }
    }

    /// Currently free slots in ascending hour order.
    pub fn free_slots(&self) -> Vec<SlotKey> {
        self.slots
            .iter()
            .filter(|(_, available)| **available)
            .map(|(slot, _)| *slot)
            .collect()
    }

    /// The earliest free slot, if any.
    pub fn first_free_slot(&self) -> Option<SlotKey> {
        self.free_slots().first().copied()
    }
}

/// A queued urgent scheduling request.
///
/// No slot is reserved at enqueue time; the request is resolved (or
/// discarded) when processed.
#[derive(Debug, Clone)]
pub struct EmergencyRequest {
    pub request_id: String,
    pub priority: Priority,
    pub patient_id: PatientId,
    pub specialization: String,
    pub created_at: DateTime<Local>,
    seq: u64,
}

impl EmergencyRequest {
    pub fn new(patient_id: PatientId, specialization: String, seq: u64) -> Self {
        EmergencyRequest {
            request_id: Uuid::new_v4().to_string(),
            priority: Priority::Emergency,
            patient_id,
            specialization,
            created_at: Local::now(),
            seq,
        }
    }
}

impl PartialEq for EmergencyRequest {
    fn eq(&self, other: &Self) -> bool {
        self.request_id == other.request_id
    }
}

impl Eq for EmergencyRequest {}

impl PartialOrd for EmergencyRequest {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EmergencyRequest {
    /// Ordering for the max-heap emergency queue.
    ///
    /// Higher priority pops first; equal priorities pop in arrival order.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.priority.cmp(&other.priority) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            ordering => ordering,
        }
    }
}
