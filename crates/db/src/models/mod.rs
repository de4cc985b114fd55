pub mod swift_bank;
