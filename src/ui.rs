// UI layer: the menu loop and the three flows it dispatches to.
// The functions are small and synchronous to make the flow easy to follow.

use crate::console::Console;
use crate::error::{AppError, Result};
use crate::values::ValueList;
use std::str::FromStr;

const MENU_PROMPT: &str = "Masukkan pilihan [1/2/3/4]";
const COUNT_PROMPT: &str = "Masukkan jumlah nilai tugas";
const SEARCH_PROMPT: &str = "Masukkan angka yang dicari";

pub const SORT_NEEDS_DATA: &str = "Silakan input angka terlebih dahulu.";
pub const SEARCH_NEEDS_DATA: &str = "Data kosong. Silakan input angka dulu.";
pub const INVALID_CHOICE: &str = "Pilihan tidak valid. Coba lagi.";
pub const FAREWELL: &str = "Program selesai.";
pub const NOT_FOUND: &str = "Angka tidak ditemukan";

/// One of the four entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Input,
    Sort,
    Search,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Input),
            "2" => Ok(MenuChoice::Sort),
            "3" => Ok(MenuChoice::Search),
            "4" => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

/// Main interactive menu. Starts from an empty list and loops until the
/// user chooses "Selesai". A malformed number ends the loop with an error.
pub fn main_menu(console: &mut impl Console) -> Result<()> {
    let mut values = ValueList::new();
    run_menu(console, &mut values)
}

/// Menu loop over caller-owned state, so the list can be inspected
/// after the loop returns.
pub fn run_menu(console: &mut impl Console, values: &mut ValueList) -> Result<()> {
    loop {
        print_menu(console);
        let line = console.read_line(MENU_PROMPT)?;
        let Ok(choice) = line.parse::<MenuChoice>() else {
            tracing::debug!(input = %line, "invalid menu choice");
            console.print(INVALID_CHOICE);
            continue;
        };
        tracing::debug!(?choice, "menu choice");

        match choice {
            MenuChoice::Input => input_values(console, values)?,
            MenuChoice::Sort => {
                if values.is_empty() {
                    console.print(SORT_NEEDS_DATA);
                } else {
                    sort_values(console, values);
                }
            }
            MenuChoice::Search => {
                search_value(console, values)?;
            }
            MenuChoice::Exit => {
                console.print(FAREWELL);
                break;
            }
        }
    }
    Ok(())
}

fn print_menu(console: &mut impl Console) {
    console.print("");
    console.print("MENU PILIHAN");
    console.print("1. Input angka");
    console.print("2. Sorting");
    console.print("3. Searching");
    console.print("4. Selesai");
}

/// Ask for a count and then that many integers, replacing the list.
/// The old contents survive if any line fails to parse.
pub fn input_values(console: &mut impl Console, values: &mut ValueList) -> Result<()> {
    let line = console.read_line(COUNT_PROMPT)?;
    let count: usize = line
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidCount { input: line.clone() })?;

    console.print("Input Angka");
    console.print(&"-".repeat(40));

    // `count` is user supplied; grow as values arrive.
    let mut entered = Vec::new();
    for i in 1..=count {
        let value = read_number(console, &format!("Angka {i}"))?;
        entered.push(value);
    }

    tracing::debug!(count, "values entered");
    values.replace(entered);
    Ok(())
}

/// Sort the list and print it. Callers check for an empty list first.
pub fn sort_values(console: &mut impl Console, values: &mut ValueList) {
    values.sort();
    tracing::debug!(len = values.len(), "values sorted");

    console.print("");
    console.print("TAMPIL HASIL SORTING");
    console.print(&format!("Hasil sorting: {values}"));
}

/// Ask for a target and report the index of its first occurrence.
/// Returns that index, or `None` when absent or the list is empty.
pub fn search_value(console: &mut impl Console, values: &ValueList) -> Result<Option<usize>> {
    if values.is_empty() {
        console.print(SEARCH_NEEDS_DATA);
        return Ok(None);
    }

    let wanted = read_number(console, SEARCH_PROMPT)?;
    let found = values.position(wanted);
    tracing::debug!(wanted, ?found, "search finished");

    console.print("");
    console.print("TAMPIL HASIL SEARCHING");
    match found {
        Some(index) => console.print(&format!("Angka ditemukan di indeks: {index}")),
        None => console.print(NOT_FOUND),
    }
    Ok(found)
}

fn read_number(console: &mut impl Console, prompt: &str) -> Result<i64> {
    let line = console.read_line(prompt)?;
    line.trim()
        .parse()
        .map_err(|_| AppError::InvalidNumber { input: line })
}
