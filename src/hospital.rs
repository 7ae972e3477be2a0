/// Hospital aggregate: patient registry, appointment scheduling and the
/// emergency queue.
///
/// All state lives here and is mutated by the single interactive thread;
/// each operation runs to completion before control returns to the menu.

use crate::error::HospitalError;
use crate::models::{
    Doctor, EmergencyRequest, Patient, PatientId, SlotKey, FIRST_PATIENT_ID,
};
use std::collections::BinaryHeap;

/// Seed entry for one doctor in the starting roster.
#[derive(Debug, Clone)]
pub struct DoctorSeed {
    pub name: String,
    pub age: i32,
    pub contact: String,
    pub specialization: String,
}

impl DoctorSeed {
    pub fn new(name: &str, age: i32, contact: &str, specialization: &str) -> Self {
        DoctorSeed {
            name: name.to_string(),
            age,
            contact: contact.to_string(),
            specialization: specialization.to_string(),
        }
    }
}

/// Startup configuration: the doctor roster.
///
/// Passed explicitly to the constructor rather than hard-coded inside it;
/// the default roster matches the three starter doctors.
#[derive(Debug, Clone)]
pub struct HospitalConfig {
    pub doctors: Vec<DoctorSeed>,
}

impl Default for HospitalConfig {
    fn default() -> Self {
        HospitalConfig {
            doctors: vec![
                DoctorSeed::new("Dr. Smith", 45, "111-2222", "Cardiology"),
                DoctorSeed::new("Dr. Johnson", 38, "333-4444", "Neurology"),
                DoctorSeed::new("Dr. Williams", 50, "555-6666", "General"),
            ],
        }
    }
}

/// A confirmed booking: which doctor, which slot, for which patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub doctor: String,
    pub slot: SlotKey,
    pub patient_id: PatientId,
}

/// Outcome of processing one emergency request.
///
/// `booking` is None when no matching doctor had a free slot; the request
/// has already been popped and is discarded, not requeued.
#[derive(Debug)]
pub struct EmergencyOutcome {
    pub request: EmergencyRequest,
    pub booking: Option<Booking>,
}

/// The front-desk aggregate.
pub struct Hospital {
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    emergency_queue: BinaryHeap<EmergencyRequest>,
    next_patient_id: u32,
    next_seq: u64,
}

impl Hospital {
    /// Build a hospital with the configured doctor roster and no patients.
    pub fn new(config: HospitalConfig) -> Self {
        let doctors = config
            .doctors
            .into_iter()
            .map(|seed| Doctor::new(seed.name, seed.age, seed.contact, seed.specialization))
            .collect();

        Hospital {
            patients: Vec::new(),
            doctors,
            emergency_queue: BinaryHeap::new(),
            next_patient_id: FIRST_PATIENT_ID,
            next_seq: 0,
        }
    }

    /// Register a new patient and return the assigned identifier.
    ///
    /// Identifiers are assigned sequentially starting at 1000 and never
    /// reused. No field validation is performed.
    pub fn register_patient(
        &mut self,
        name: String,
        age: i32,
        contact: String,
        blood_group: String,
    ) -> PatientId {
        let id = PatientId(self.next_patient_id);
        self.next_patient_id += 1;
        self.patients
            .push(Patient::new(id, name, age, contact, blood_group));
        id
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn patient_mut(&mut self, id: PatientId) -> Option<&mut Patient> {
        self.patients.iter_mut().find(|p| p.id == id)
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Specialization labels in roster order (duplicates kept).
    pub fn specializations(&self) -> Vec<&str> {
        self.doctors
            .iter()
            .map(|d| d.specialization.as_str())
            .collect()
    }

    /// Free slots per matching doctor, in roster order.
    pub fn free_slots(
        &self,
        specialization: &str,
    ) -> Result<Vec<(&Doctor, Vec<SlotKey>)>, HospitalError> {
        let listing: Vec<(&Doctor, Vec<SlotKey>)> = self
            .doctors
            .iter()
            .filter(|d| d.specialization == specialization)
            .map(|d| (d, d.free_slots()))
            .collect();

        if listing.is_empty() {
            return Err(HospitalError::NoMatchingSpecialization(
                specialization.to_string(),
            ));
        }
        Ok(listing)
    }

    fn require_patient(&self, patient_id: PatientId) -> Result<(), HospitalError> {
        if self.patients.is_empty() {
            return Err(HospitalError::EmptyRegistry);
        }
        if self.patient(patient_id).is_none() {
            return Err(HospitalError::PatientNotFound(patient_id));
        }
        Ok(())
    }

    /// Book a non-emergency appointment at the requested slot.
    ///
    /// Doctors are scanned in roster order; every doctor sharing the
    /// specialization is tried, and the first with the slot free gets the
    /// booking. Nothing is mutated on any error path.
    pub fn schedule_appointment(
        &mut self,
        patient_id: PatientId,
        specialization: &str,
        slot: SlotKey,
    ) -> Result<Booking, HospitalError> {
        self.require_patient(patient_id)?;

        let mut matched = false;
        for doctor in self
            .doctors
            .iter_mut()
            .filter(|d| d.specialization == specialization)
        {
            matched = true;
            if doctor.book(slot) {
                return Ok(Booking {
                    doctor: doctor.name.clone(),
                    slot,
                    patient_id,
                });
            }
        }

        if matched {
            Err(HospitalError::SlotUnavailable(slot))
        } else {
            Err(HospitalError::NoMatchingSpecialization(
                specialization.to_string(),
            ))
        }
    }

    /// Queue an emergency request at maximum priority.
    ///
    /// No slot is reserved here; the booking happens when the request is
    /// processed.
    pub fn enqueue_emergency(
        &mut self,
        patient_id: PatientId,
        specialization: &str,
    ) -> Result<(), HospitalError> {
        self.require_patient(patient_id)?;

        let seq = self.next_seq;
        self.next_seq += 1;
        self.emergency_queue.push(EmergencyRequest::new(
            patient_id,
            specialization.to_string(),
            seq,
        ));
        Ok(())
    }

    pub fn pending_emergencies(&self) -> usize {
        self.emergency_queue.len()
    }

    /// Pop and service the highest-priority emergency request.
    ///
    /// Scans doctors in roster order for the first specialization match
    /// with a free slot and books the earliest free hour. A request that
    /// cannot be served is discarded, never requeued.
    pub fn process_next_emergency(&mut self) -> Result<EmergencyOutcome, HospitalError> {
        let request = self
            .emergency_queue
            .pop()
            .ok_or(HospitalError::QueueEmpty)?;

        for doctor in self
            .doctors
            .iter_mut()
            .filter(|d| d.specialization == request.specialization)
        {
            if let Some(slot) = doctor.first_free_slot() {
                doctor.book(slot);
                let booking = Booking {
                    doctor: doctor.name.clone(),
                    slot,
                    patient_id: request.patient_id,
                };
                return Ok(EmergencyOutcome {
                    request,
                    booking: Some(booking),
                });
            }
        }

        Ok(EmergencyOutcome {
            request,
            booking: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_hospital() -> Hospital {
        Hospital::new(HospitalConfig::default())
    }

    fn register_alice(hospital: &mut Hospital) -> PatientId {
        hospital.register_patient(
            "Alice".to_string(),
            30,
            "555-0001".to_string(),
            "O+".to_string(),
        )
    }

    fn slot(hour: u32) -> SlotKey {
        SlotKey::new(hour).unwrap()
    }

    #[test]
    fn patient_ids_start_at_1000_and_increment() {
        let mut hospital = seeded_hospital();
        assert_eq!(register_alice(&mut hospital), PatientId(1000));
        let bob = hospital.register_patient(
            "Bob".to_string(),
            40,
            "555-0002".to_string(),
            "A-".to_string(),
        );
        assert_eq!(bob, PatientId(1001));
    }

    #[test]
    fn ids_stay_sequential_across_interleaved_operations() {
        let mut hospital = seeded_hospital();
        let first = register_alice(&mut hospital);
        hospital
            .schedule_appointment(first, "Cardiology", slot(9))
            .unwrap();
        hospital.enqueue_emergency(first, "General").unwrap();
        hospital.process_next_emergency().unwrap();

        let second = hospital.register_patient(
            "Bob".to_string(),
            40,
            "555-0002".to_string(),
            "A-".to_string(),
        );
        assert_eq!(second, PatientId(1001));
    }

    #[test]
    fn schedule_books_requested_slot_once() {
        let mut hospital = seeded_hospital();
        let alice = register_alice(&mut hospital);

        let booking = hospital
            .schedule_appointment(alice, "Cardiology", slot(9))
            .unwrap();
        assert_eq!(booking.doctor, "Dr. Smith");
        assert_eq!(booking.slot, slot(9));

        let second = hospital.schedule_appointment(alice, "Cardiology", slot(9));
        assert_eq!(second, Err(HospitalError::SlotUnavailable(slot(9))));
    }

    #[test]
    fn schedule_with_empty_registry_fails() {
        let mut hospital = seeded_hospital();
        let result = hospital.schedule_appointment(PatientId(1000), "Cardiology", slot(9));
        assert_eq!(result, Err(HospitalError::EmptyRegistry));
    }

    #[test]
    fn schedule_with_unknown_patient_mutates_nothing() {
        let mut hospital = seeded_hospital();
        register_alice(&mut hospital);

        let result = hospital.schedule_appointment(PatientId(9999), "Cardiology", slot(9));
        assert_eq!(result, Err(HospitalError::PatientNotFound(PatientId(9999))));

        for doctor in hospital.doctors() {
            assert_eq!(doctor.free_slots().len(), 9);
        }
        assert_eq!(hospital.pending_emergencies(), 0);
    }

    #[test]
    fn schedule_unknown_specialization_mutates_nothing() {
        let mut hospital = seeded_hospital();
        let alice = register_alice(&mut hospital);

        let result = hospital.schedule_appointment(alice, "Oncology", slot(9));
        assert_eq!(
            result,
            Err(HospitalError::NoMatchingSpecialization(
                "Oncology".to_string()
            ))
        );
        for doctor in hospital.doctors() {
            assert_eq!(doctor.free_slots().len(), 9);
        }
    }

    #[test]
    fn schedule_tries_every_doctor_with_the_specialization() {
        let mut config = HospitalConfig::default();
        config
            .doctors
            .push(DoctorSeed::new("Dr. Patel", 41, "777-8888", "Cardiology"));
        let mut hospital = Hospital::new(config);
        let alice = register_alice(&mut hospital);

        let first = hospital
            .schedule_appointment(alice, "Cardiology", slot(9))
            .unwrap();
        assert_eq!(first.doctor, "Dr. Smith");

        // Same slot again lands with the second cardiologist.
        let second = hospital
            .schedule_appointment(alice, "Cardiology", slot(9))
            .unwrap();
        assert_eq!(second.doctor, "Dr. Patel");

        let third = hospital.schedule_appointment(alice, "Cardiology", slot(9));
        assert_eq!(third, Err(HospitalError::SlotUnavailable(slot(9))));
    }

    #[test]
    fn emergency_books_earliest_free_hour() {
        let mut hospital = seeded_hospital();
        let alice = register_alice(&mut hospital);

        hospital.enqueue_emergency(alice, "Neurology").unwrap();
        let outcome = hospital.process_next_emergency().unwrap();

        let booking = outcome.booking.unwrap();
        assert_eq!(booking.doctor, "Dr. Johnson");
        assert_eq!(booking.slot, slot(9));
        assert_eq!(hospital.pending_emergencies(), 0);
    }

    #[test]
    fn emergency_skips_booked_hours() {
        let mut hospital = seeded_hospital();
        let alice = register_alice(&mut hospital);
        hospital
            .schedule_appointment(alice, "Neurology", slot(9))
            .unwrap();

        hospital.enqueue_emergency(alice, "Neurology").unwrap();
        let outcome = hospital.process_next_emergency().unwrap();
        assert_eq!(outcome.booking.unwrap().slot, slot(10));
    }

    #[test]
    fn processing_empty_queue_is_a_no_op() {
        let mut hospital = seeded_hospital();
        register_alice(&mut hospital);

        let result = hospital.process_next_emergency();
        assert!(matches!(result, Err(HospitalError::QueueEmpty)));
        for doctor in hospital.doctors() {
            assert_eq!(doctor.free_slots().len(), 9);
        }
    }

    #[test]
    fn unserved_emergency_is_discarded_not_requeued() {
        let mut hospital = seeded_hospital();
        let alice = register_alice(&mut hospital);

        for key in SlotKey::all() {
            hospital
                .schedule_appointment(alice, "General", key)
                .unwrap();
        }

        hospital.enqueue_emergency(alice, "General").unwrap();
        let outcome = hospital.process_next_emergency().unwrap();
        assert!(outcome.booking.is_none());
        assert_eq!(hospital.pending_emergencies(), 0);
    }

    #[test]
    fn emergencies_drain_in_arrival_order() {
        let mut hospital = seeded_hospital();
        let alice = register_alice(&mut hospital);
        let bob = hospital.register_patient(
            "Bob".to_string(),
            40,
            "555-0002".to_string(),
            "A-".to_string(),
        );

        hospital.enqueue_emergency(alice, "General").unwrap();
        hospital.enqueue_emergency(bob, "General").unwrap();

        let first = hospital.process_next_emergency().unwrap();
        let second = hospital.process_next_emergency().unwrap();
        assert_eq!(first.request.patient_id, alice);
        assert_eq!(second.request.patient_id, bob);
        assert_eq!(first.booking.unwrap().slot, slot(9));
        assert_eq!(second.booking.unwrap().slot, slot(10));
    }

    #[test]
    fn enqueue_requires_known_patient() {
        let mut hospital = seeded_hospital();
        assert_eq!(
            hospital.enqueue_emergency(PatientId(1000), "General"),
            Err(HospitalError::EmptyRegistry)
        );

        register_alice(&mut hospital);
        assert_eq!(
            hospital.enqueue_emergency(PatientId(2000), "General"),
            Err(HospitalError::PatientNotFound(PatientId(2000)))
        );
        assert_eq!(hospital.pending_emergencies(), 0);
    }

    #[test]
    fn free_slot_listing_omits_booked_slots() {
        let mut hospital = seeded_hospital();
        let alice = register_alice(&mut hospital);
        hospital
            .schedule_appointment(alice, "Cardiology", slot(12))
            .unwrap();

        let listing = hospital.free_slots("Cardiology").unwrap();
        assert_eq!(listing.len(), 1);
        let (doctor, free) = &listing[0];
        assert_eq!(doctor.name, "Dr. Smith");
        assert_eq!(free.len(), 8);
        assert!(!free.contains(&slot(12)));

        assert!(matches!(
            hospital.free_slots("Oncology"),
            Err(HospitalError::NoMatchingSpecialization(_))
        ));
    }

    #[test]
    fn medical_history_can_be_appended_through_the_registry() {
        let mut hospital = seeded_hospital();
        let alice = register_alice(&mut hospital);

        hospital
            .patient_mut(alice)
            .unwrap()
            .add_record("Admitted with chest pain".to_string());
        assert_eq!(
            hospital.patient(alice).unwrap().medical_history(),
            ["Admitted with chest pain"]
        );
    }
}
