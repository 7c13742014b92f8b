use crate::wallet::rpc::RpcManager;
use anyhow::{anyhow, Result};
use solana_sdk::{
    instruction::Instruction, message::Message, native_token::LAMPORTS_PER_SOL, pubkey::Pubkey,
    system_instruction, transaction::Transaction,
};

/// Convert a SOL amount to lamports, rounding down.
///
/// Returns `None` for non-finite, non-positive or out-of-range amounts.
pub fn sol_to_lamports_floor(sol: f64) -> Option<u64> {
    if !sol.is_finite() || sol <= 0.0 {
        return None;
    }

    let lamports = (sol * LAMPORTS_PER_SOL as f64).floor();
    if lamports >= u64::MAX as f64 {
        return None;
    }

    Some(lamports as u64)
}

pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// System-program transfer of `lamports` from `from` to `to`
pub fn transfer_instruction(from: &Pubkey, to: &Pubkey, lamports: u64) -> Instruction {
    system_instruction::transfer(from, to, lamports)
}

/// Transaction builder
pub struct TransactionBuilder {
    instructions: Vec<Instruction>,
    fee_payer: Option<Pubkey>,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self {
            instructions: Vec::new(),
            fee_payer: None,
        }
    }

    /// Set the fee payer
    pub fn fee_payer(mut self, payer: Pubkey) -> Self {
        self.fee_payer = Some(payer);
        self
    }

    pub fn add_instructions(mut self, instructions: impl IntoIterator<Item = Instruction>) -> Self {
        self.instructions.extend(instructions);
        self
    }

    /// Build an unsigned transaction against the latest blockhash
    pub async fn build(self, rpc: &RpcManager) -> Result<Transaction> {
        let mut message = self.message()?;
        message.recent_blockhash = rpc.get_latest_blockhash().await?;

        Ok(Transaction::new_unsigned(message))
    }

    fn message(&self) -> Result<Message> {
        if self.instructions.is_empty() {
            return Err(anyhow!("No instructions to build transaction"));
        }

        let fee_payer = self.fee_payer.ok_or_else(|| anyhow!("Fee payer not set"))?;

        Ok(Message::new(&self.instructions, Some(&fee_payer)))
    }
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
