//! Payment and sale registries.

use crate::macros::constant_registry;

constant_registry! {
    /// Lifecycle of a payment.
    pub enum PaymentState as "Payment.States" {
        Pending = "PENDING" => "Pendiente",
        Paid = "PAID" => "Pagado",
        Cancelled = "CANCELLED" => "Anulado",
        Refunded = "REFUNDED" => "Devuelto",
        PartiallyRefunded = "PARTIALLY_REFUNDED" => "Devuelto parcialmente",
    }
}

constant_registry! {
    /// How a payment was collected.
    pub enum PaymentMethod as "Payment.Methods" {
        Cash = "CASH" => "Efectivo",
        Card = "CARD" => "Tarjeta",
        Transfer = "TRANSFER" => "Transferencia",
        DirectDebit = "DIRECT_DEBIT" => "Domiciliación bancaria",
    }
}

constant_registry! {
    /// Lifecycle of a point-of-sale ticket.
    pub enum SaleState as "Sale.States" {
        Open = "OPEN" => "Abierta",
        Closed = "CLOSED" => "Cerrada",
        Cancelled = "CANCELLED" => "Anulada",
    }
}
