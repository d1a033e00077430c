use thiserror::Error;

use crate::store::StoreError;

/// Erros possíveis durante a importação de um extrato bancário
#[derive(Error, Debug)]
pub enum ImportError {
    /// Nenhum arquivo foi enviado na requisição
    #[error("No file uploaded")]
    NoFileUploaded,

    /// O conteúdo não possui os marcadores de abertura/fechamento do documento
    #[error("Not a valid statement file")]
    NotAStatementFile,

    /// Nenhuma transação foi encontrada por nenhuma das estratégias de parsing
    #[error("No transaction data found")]
    NoTransactionData,

    /// Falha inesperada na camada de armazenamento (detalhe fica no log do servidor)
    #[error("Unexpected error while importing the statement")]
    Storage(#[from] StoreError),
}

/// Defeito localizado em um único registro; o lote continua sem ele
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    /// Valor ausente ou não numérico
    #[error("transaction amount is missing or not numeric")]
    BadAmount,

    /// Registro sem identificador FITID
    #[error("transaction has no FITID")]
    MissingFitId,
}

/// Erros do fluxo de lançamento manual de transações
#[derive(Error, Debug)]
pub enum ManualEntryError {
    /// Data fora do formato ISO-8601
    #[error("Date invalid")]
    InvalidDate,

    /// Falha inesperada na camada de armazenamento
    #[error("Unexpected error while saving the transaction")]
    Storage(#[from] StoreError),
}

/// Alias conveniente para Result com o erro principal de importação
pub type ImportResult<T> = Result<T, ImportError>;
