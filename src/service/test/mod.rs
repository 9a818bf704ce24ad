mod account;
mod ai;
mod gift_code;
mod session;
mod token;
