use image::{GrayImage, Luma};

use super::QR;
use crate::common::metadata::Color;

const QUIET_ZONE: usize = 4;

// Renderers over the finished matrix
//------------------------------------------------------------------------------

impl QR {
    fn color_at(&self, r: usize, c: usize) -> Color {
        *self.get(r as i16, c as i16)
    }

    pub fn to_image(&self, module_sz: u32) -> GrayImage {
        let qz_sz = QUIET_ZONE as u32 * module_sz;
        let qr_sz = self.width() as u32 * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = GrayImage::new(total_sz, total_sz);
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.put_pixel(j, i, Luma([255]));
                    continue;
                }
                let r = (i - qz_sz) / module_sz;
                let c = (j - qz_sz) / module_sz;
                let clr = self.color_at(r as usize, c as usize);
                canvas.put_pixel(j, i, clr.select(Luma([255]), Luma([0])));
            }
        }

        canvas
    }

    pub fn to_svg(&self, module_sz: usize) -> String {
        let total_sz = (QUIET_ZONE * 2 + self.width()) * module_sz;

        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{total_sz}" height="{total_sz}" viewBox="0 0 {total_sz} {total_sz}" shape-rendering="crispEdges">"#
        ));
        svg.push('\n');
        svg.push_str(r##"<rect width="100%" height="100%" fill="#FFFFFF"/>"##);
        svg.push('\n');
        for r in 0..self.width() {
            for c in 0..self.width() {
                if self.color_at(r, c) == Color::Light {
                    continue;
                }
                let x = (c + QUIET_ZONE) * module_sz;
                let y = (r + QUIET_ZONE) * module_sz;
                svg.push_str(&format!(
                    r##"<rect x="{x}" y="{y}" width="{module_sz}" height="{module_sz}" fill="#000000"/>"##
                ));
                svg.push('\n');
            }
        }
        svg.push_str("</svg>\n");
        svg
    }

    /// Light modules print as full blocks so the symbol reads on dark terminals.
    pub fn to_str(&self, module_sz: usize) -> String {
        let qz_sz = QUIET_ZONE * module_sz;
        let qr_sz = self.width() * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = String::new();
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.push('█');
                    continue;
                }
                let r = (i - qz_sz) / module_sz;
                let c = (j - qz_sz) / module_sz;
                canvas.push(self.color_at(r, c).select('█', ' '));
            }
            canvas.push('\n');
        }

        canvas
    }
}
