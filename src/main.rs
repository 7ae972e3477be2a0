#![allow(dead_code)]
/// Command-line interface for the hospital front desk.
///
/// This module provides an interactive menu for registering patients,
/// scheduling appointments, processing the emergency queue and listing
/// registered patients.

mod error;
mod hospital;
mod models;

use hospital::{Hospital, HospitalConfig};
use models::{PatientId, SlotKey};
use std::io::{self, Write};
use std::str::FromStr;

struct HospitalCli {
    hospital: Hospital,
    running: bool,
}

impl HospitalCli {
    fn new(config: HospitalConfig) -> Self {
        HospitalCli {
            hospital: Hospital::new(config),
            running: true,
        }
    }

    fn print_header(&self) {
        println!("\n{}", "=".repeat(60));
        println!("       HOSPITAL FRONT DESK");
        println!("{}", "=".repeat(60));
    }

    fn print_menu(&self) {
        println!("\n--- Main Menu ---");
        println!("1. Register patient");
        println!("2. Schedule appointment");
        println!("3. Process next emergency");
        println!("4. View all patients");
        println!("5. Exit");
        println!("{}", "-".repeat(20));
    }

    fn get_input(&self, prompt: &str, default: Option<&str>) -> String {
        if let Some(def) = default {
            print!("{} [{}]: ", prompt, def);
        } else {
            print!("{}: ", prompt);
        }
        io::stdout().flush().unwrap();

        let mut input = String::new();
        io::stdin().read_line(&mut input).unwrap();
        let input = input.trim();

        if input.is_empty() {
            default.unwrap_or("").to_string()
        } else {
            input.to_string()
        }
    }

    fn get_parsed<T: FromStr>(&self, prompt: &str, default: Option<&str>) -> T {
        loop {
            let input = self.get_input(prompt, default);
            if let Ok(value) = input.parse::<T>() {
                return value;
            }
            println!("Please enter a valid number");
        }
    }

    fn get_slot(&self, prompt: &str) -> SlotKey {
        loop {
            let input = self.get_input(prompt, None);
            match input.parse::<SlotKey>() {
                Ok(slot) => return slot,
                Err(e) => println!("{}", e),
            }
        }
    }

    fn register_patient(&mut self) {
        println!("\n--- Register Patient ---");

        let name = self.get_input("Name", None);
        let age = self.get_parsed::<i32>("Age", None);
        let contact = self.get_input("Contact", None);
        let blood_group = self.get_input("Blood group", None);

        let id = self
            .hospital
            .register_patient(name, age, contact, blood_group);
        println!("\nPatient registered! ID: {}", id);
    }

    fn schedule_appointment(&mut self) {
        if self.hospital.patients().is_empty() {
            println!("\nNo patients registered");
            return;
        }

        println!("\n--- Schedule Appointment ---");

        let patient_id = PatientId(self.get_parsed::<u32>("Patient ID", None));
        if self.hospital.patient(patient_id).is_none() {
            println!("\nPatient {} not found", patient_id);
            return;
        }

        println!("\nAvailable specializations:");
        for spec in self.hospital.specializations() {
            println!("- {}", spec);
        }

        let specialization = self.get_input("Required specialization", None);
        let emergency = self.get_parsed::<u8>("Is this an emergency? (1/0)", Some("0"));

        if emergency == 1 {
            match self.hospital.enqueue_emergency(patient_id, &specialization) {
                Ok(()) => println!(
                    "\nAdded to emergency queue! Pending emergencies: {}",
                    self.hospital.pending_emergencies()
                ),
                Err(e) => println!("\n{}", e),
            }
            return;
        }

        let listing = match self.hospital.free_slots(&specialization) {
            Ok(listing) => listing,
            Err(e) => {
                println!("\n{}", e);
                return;
            }
        };

        for (doctor, free) in &listing {
            println!("\n{} ({})", doctor.name, doctor.specialization);
            println!("Available slots:");
            for slot in free {
                println!("- {}", slot);
            }
        }

        let slot = self.get_slot("Preferred time");
        match self
            .hospital
            .schedule_appointment(patient_id, &specialization, slot)
        {
            Ok(booking) => println!(
                "\nAppointment booked with {} at {}",
                booking.doctor, booking.slot
            ),
            Err(e) => println!("\n{}", e),
        }
    }

    fn process_emergency(&mut self) {
        match self.hospital.process_next_emergency() {
            Ok(outcome) => {
                println!(
                    "\nProcessing {} request for patient {} ({})",
                    outcome.request.priority.name(),
                    outcome.request.patient_id,
                    outcome.request.created_at.format("%H:%M:%S")
                );
                match outcome.booking {
                    Some(booking) => println!(
                        "Emergency appointment with {} at {}",
                        booking.doctor, booking.slot
                    ),
                    None => println!(
                        "No doctors available for '{}'",
                        outcome.request.specialization
                    ),
                }
            }
            Err(e) => println!("\n{}", e),
        }
    }

    fn list_patients(&self) {
        let patients = self.hospital.patients();
        if patients.is_empty() {
            println!("\nNo patients registered");
            return;
        }

        println!("\n--- Registered Patients ({}) ---", patients.len());
        for patient in patients {
            println!("\n{}", patient);
        }
    }

    fn run(&mut self) {
        self.print_header();

        while self.running {
            self.print_menu();

            let choice = self.get_parsed::<u32>("Enter choice", None);

            match choice {
                1 => self.register_patient(),
                2 => self.schedule_appointment(),
                3 => self.process_emergency(),
                4 => self.list_patients(),
                5 => {
                    self.running = false;
                    println!("\nGoodbye!");
                }
                _ => println!("Invalid choice"),
            }
        }
    }
}

fn main() {
    let mut cli = HospitalCli::new(HospitalConfig::default());
    cli.run();
}
