//! # Ports
//!
//! Inbound API and outbound collaborator traits (hexagonal boundaries).

pub mod inbound;
pub mod outbound;

pub use inbound::OrchestratorApi;
pub use outbound::{
    CacheSink, Declined, LedgerFault, LedgerReader, LedgerWriter, MockLedger, MockQuoteProvider,
    MockSigner, Quote, QuoteFault, QuoteProvider, ReceiptWait, RecordingCacheSink, WalletSigner,
};
