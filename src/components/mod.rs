pub mod alert;
pub mod field;
pub mod copy_button;
pub mod create_tx;
pub mod generate_address;
pub mod get_balance;
pub mod list_transactions;
pub mod send_to_address;
pub mod sign_tx;
pub mod broadcast_tx;

pub use alert::Alert;
pub use field::Field;
pub use copy_button::CopyButton;
pub use create_tx::CreateTx;
pub use generate_address::GenerateAddress;
pub use get_balance::GetBalance;
pub use list_transactions::ListTransactions;
pub use send_to_address::SendToAddress;
pub use sign_tx::SignTx;
pub use broadcast_tx::BroadcastTx;
