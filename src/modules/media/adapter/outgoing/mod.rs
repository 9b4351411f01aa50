pub mod storage_signer_gcs;
pub mod storage_signer_offline;
