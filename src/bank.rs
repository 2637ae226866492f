//! Static demo account data shown in the overview column.

use serde::Serialize;

pub const ACCOUNT_BALANCE: &str = "$12,450.00";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub date: &'static str,
    pub description: &'static str,
    pub amount: &'static str,
}

impl Transaction {
    pub fn is_credit(&self) -> bool {
        self.amount.starts_with('+')
    }

    /// CSS color for the amount.
    pub fn color(&self) -> &'static str {
        if self.is_credit() {
            "green"
        } else {
            "red"
        }
    }
}

pub const RECENT_TRANSACTIONS: [Transaction; 4] = [
    Transaction {
        date: "2024-01-15",
        description: "Salary Deposit",
        amount: "+$3,500.00",
    },
    Transaction {
        date: "2024-01-14",
        description: "Electric Bill",
        amount: "-$125.50",
    },
    Transaction {
        date: "2024-01-13",
        description: "Grocery Store",
        amount: "-$87.30",
    },
    Transaction {
        date: "2024-01-12",
        description: "Transfer to Savings",
        amount: "-$500.00",
    },
];

pub const AVAILABLE_SERVICES: [&str; 6] = [
    "💳 Account Management",
    "💰 Money Transfers",
    "📊 Account Statements",
    "🔒 Security Settings",
    "💵 Loan Information",
    "📈 Investment Options",
];

/// Quick links in the overview column. None of them lead anywhere yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickLink {
    Cards,
    Statements,
    Settings,
}

impl QuickLink {
    pub const ALL: [QuickLink; 3] = [Self::Cards, Self::Statements, Self::Settings];

    pub fn from_slug(s: &str) -> Option<Self> {
        match s {
            "cards" => Some(Self::Cards),
            "statements" => Some(Self::Statements),
            "settings" => Some(Self::Settings),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Cards => "cards",
            Self::Statements => "statements",
            Self::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cards => "💳 View Cards",
            Self::Statements => "📊 Statements",
            Self::Settings => "⚙️ Settings",
        }
    }

    pub fn notice(&self) -> &'static str {
        match self {
            Self::Cards => "Card management page would open here",
            Self::Statements => "Account statements page would open here",
            Self::Settings => "Account settings page would open here",
        }
    }
}
