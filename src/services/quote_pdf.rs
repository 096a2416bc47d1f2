// src/services/quote_pdf.rs

use genpdf::{Element, elements, style};
use image::Luma;
use qrcode::QrCode;

use crate::{
    common::error::AppError,
    models::{catalog::Product, quotes::QuoteRequest},
};

/// Gera o PDF de orçamento enviado ao cliente: cabeçalho da empresa, dados
/// do pedido e um QR Code apontando para a página pública do produto (ou do
/// site, quando não há produto associado).
#[derive(Clone)]
pub struct QuotePdfService {
    company_name: String,
    site_url: String,
}

impl QuotePdfService {
    pub fn new(company_name: String, site_url: String) -> Self {
        Self { company_name, site_url }
    }

    pub fn generate_quote_pdf(
        &self,
        quote: &QuoteRequest,
        product: Option<&Product>,
    ) -> Result<Vec<u8>, AppError> {
        // Carrega a fonte da pasta 'fonts/'
        let font_family = genpdf::fonts::from_files("./fonts", "Roboto", None)
            .map_err(|_| AppError::FontNotFound("Fonte não encontrada na pasta ./fonts".to_string()))?;

        let mut doc = genpdf::Document::new(font_family);
        doc.set_title(format!("Orçamento - {}", quote.customer_name));
        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);

        // --- CABEÇALHO ---
        doc.push(
            elements::Paragraph::new(self.company_name.clone())
                .styled(style::Style::new().bold().with_font_size(18)),
        );
        doc.push(
            elements::Paragraph::new("Soluções em GIS e Energia Solar")
                .styled(style::Style::new().with_font_size(10)),
        );

        doc.push(elements::Break::new(1.5));

        doc.push(
            elements::Paragraph::new(format!("SOLICITAÇÃO DE ORÇAMENTO #{}", quote.id))
                .styled(style::Style::new().bold().with_font_size(14)),
        );
        doc.push(elements::Paragraph::new(format!(
            "Data: {}",
            quote.created_at.format("%d/%m/%Y")
        )));

        doc.push(elements::Break::new(2));

        // --- DADOS DO CLIENTE ---
        let style_bold = style::Style::new().bold();

        let mut table = elements::TableLayout::new(vec![1, 3]);
        table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

        let mut push_row = |label: &str, value: String| {
            table
                .row()
                .element(elements::Paragraph::new(label).styled(style_bold))
                .element(elements::Paragraph::new(value))
                .push()
                .expect("Table row error");
        };

        push_row("Cliente", quote.customer_name.clone());
        push_row("E-mail", quote.email.clone());
        if let Some(phone) = &quote.phone {
            push_row("Telefone", phone.clone());
        }
        if let Some(interest) = &quote.product_interest {
            push_row("Interesse", interest.clone());
        }

        doc.push(table);
        doc.push(elements::Break::new(1));

        doc.push(elements::Paragraph::new("Mensagem:").styled(style_bold));
        doc.push(elements::Paragraph::new(quote.message.clone()));

        doc.push(elements::Break::new(2));

        // --- PRODUTO (quando o interesse casa com o catálogo) ---
        let qr_target = if let Some(product) = product {
            doc.push(elements::Paragraph::new("PRODUTO DE REFERÊNCIA").styled(style_bold));
            doc.push(elements::Paragraph::new(format!(
                "{} — R$ {:.2}",
                product.name, product.price
            )));
            doc.push(elements::Break::new(1));

            format!("{}/products/{}", self.site_url, product.slug)
        } else {
            self.site_url.clone()
        };

        // --- QR CODE ---
        let code = QrCode::new(qr_target.as_bytes())
            .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?;

        let image_buffer = code.render::<Luma<u8>>().build();
        let dynamic_image = image::DynamicImage::ImageLuma8(image_buffer);

        let pdf_image = genpdf::elements::Image::from_dynamic_image(dynamic_image)
            .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?
            .with_scale(genpdf::Scale::new(0.5, 0.5));

        doc.push(pdf_image);
        doc.push(
            elements::Paragraph::new(qr_target).styled(style::Style::new().with_font_size(8)),
        );

        // Renderiza para buffer em memória
        let mut buffer = Vec::new();
        doc.render(&mut buffer)
            .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?;

        Ok(buffer)
    }
}
