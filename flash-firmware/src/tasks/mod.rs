// Task-Modul: Enthält alle Embassy Tasks
//
// net_task treibt den Netzwerk-Stack, controller_task enthält den
// kompletten Controller (Scheduler mit Link-Check, Fetch und LED-Toggle).

pub mod controller;
pub mod network;

// Re-export Tasks für einfachen Import
pub use controller::controller_task;
pub use network::net_task;
